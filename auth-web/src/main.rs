//! Local Account Forms - Leptos Frontend
//!
//! Login and registration forms backed by the browser's `localStorage`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;
use lib_core::config::{init_config, Config};
use services::storage::LocalStore;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[STARTUP] Account forms starting...");

    if let Err(e) = init_config(Config::default()) {
        log::error!("[STARTUP] {}", e);
        return;
    }

    // Without localStorage nothing can be persisted; refuse to mount.
    if let Err(e) = LocalStore::open() {
        log::error!("[STARTUP] {}", e);
        web_sys::console::error_1(&format!("Account forms disabled: {}", e).into());
        return;
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
    log::info!("[STARTUP] Forms mounted");
}
