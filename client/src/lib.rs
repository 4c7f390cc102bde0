//! # simplebank-client
//!
//! Leptos + WASM frontend for the SimpleBank web app.
//!
//! This crate contains the route table and navigation guard, the reactive
//! auth store with its storage collaborator, the route views, and the REST
//! helpers used to log in and register.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
