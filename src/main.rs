#![allow(warnings)]
//! Todo Cards Frontend Entry Point

mod models;
mod api;
mod config;
mod error;
mod logger;
mod store;
mod pagination;
mod format;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[main] logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
