//! Catalog Viewer Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod download;
mod store;

use app::App;
use config::CatalogConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = CatalogConfig::load();
    if let Err(e) = console_logger::init(config.log_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("[Main] Logger not installed: {}", e).into());
    }
    log::info!("[Main] Catalog viewer starting, api={}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
