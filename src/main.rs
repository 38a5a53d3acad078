mod app;

use app::{bootstrap::Application, icons::ICONS, main::App, storage::LocalStorage};
use leptos::prelude::*;
use models::AuthInterceptor;
use shared_constants::{API_BASE_URL, LOG_LEVEL, MOUNT_SELECTOR};

fn main() {
    let _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    let mut app = Application::new(|| view! { <App /> }, Some(API_BASE_URL));
    app.register_icons(ICONS);
    app.use_interceptor(AuthInterceptor::new(LocalStorage));

    if let Err(err) = app.mount(MOUNT_SELECTOR) {
        log::error!("Failed to start: {err}");
    }
}
