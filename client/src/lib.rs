//! # client
//!
//! Leptos + WASM frontend for the library desk: book borrowing, rentals,
//! room reservations, and user administration against the library REST
//! backend.
//!
//! This crate contains pages, components, application state, the REST
//! façade, and the bearer-token session. The `hydrate` feature builds the
//! browser bundle; `ssr` lets the host render the same `App`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
