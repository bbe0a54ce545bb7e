//! # client
//!
//! Leptos + WASM frontend for the portfolio site's floating assistant widget.
//!
//! The conversation state machine (`state`), endpoint contract (`net`), and
//! browser helpers (`util`) are plain Rust and test without a DOM; the
//! `components` wire them to signals and the page.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
