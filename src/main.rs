//! BizDesk Frontend
//!
//! Leptos CSR entry point.

mod app;
mod components;
mod context;
mod store;

use bizdesk_core::AppConfig;
use leptos::prelude::*;

use app::App;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_json(include_str!("../config/app.json")) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = rolling_logger::init_logger(&config.app_title, config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "bundled config rejected, using defaults");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
