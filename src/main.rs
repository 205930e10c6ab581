//! Todo App Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod filter;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    log::info!("Using API base {:?}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
