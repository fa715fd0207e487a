//! Candidate Compass Web App (Leptos + WASM)

mod api;
mod app;
mod browser;
mod components;
mod config;
mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!("Candidate Compass {} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}
