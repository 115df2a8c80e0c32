//! # pharmacy-ui
//!
//! Leptos + WASM frontend for the pharmacy portal: the staff dashboard,
//! the product catalog, and customer/pharmacist chat.
//!
//! Screen logic lives in plain state structs under `state` so it can be
//! exercised natively against a scripted HTTP client; `pages` and
//! `components` only bind those structs to signals and markup.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
