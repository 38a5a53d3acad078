pub const TOKEN_STORAGE_KEY: &str = "token";
pub const MOUNT_SELECTOR: &str = "#app";
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const BEARER_SCHEME: &str = "Bearer";

pub const API_BASE_URL: &str = "/api";
pub const API_HEALTH_ENDPOINT: &str = "health";

pub const ICON_SUGGESTION_THRESHOLD: f64 = 0.85;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
