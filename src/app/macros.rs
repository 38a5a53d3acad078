/// Traces a fallible call, logging the failure at `warn`.
#[macro_export]
macro_rules! log_call {
    ($name:expr, $body:expr) => {{
        log::debug!("-> {}", $name);
        let result = $body;
        match &result {
            Ok(_) => log::debug!("<- {}", $name),
            Err(err) => log::warn!("<- {} failed: {}", $name, err),
        }
        result
    }};
}
