//! Coin Tracker - Leptos Frontend
//!
//! Lists coins from the public market data API and shows per-coin detail,
//! price statistics and a price history chart.

use leptos::prelude::*;
use lib_core::config::{init_config, Config};
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    // A bad build-time override falls back to the defaults instead of a blank page
    match Config::from_build_env() {
        Ok(config) => {
            if let Err(e) = init_config(config) {
                log::warn!("Config not installed: {}", e);
            }
        }
        Err(e) => log::error!("Invalid build configuration, using defaults: {}", e),
    }

    log::info!("Coin tracker starting");
    utils::document::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
