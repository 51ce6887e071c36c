//! # client
//!
//! Leptos + WASM frontend for the publishing dashboard: the admin
//! transactions page and the author manuscripts page.
//!
//! This crate contains pages, components, view-model state, async action
//! workflows, and the REST client. Browser-only glue is gated behind the
//! `hydrate` feature and server rendering behind `ssr`; everything else is
//! plain Rust and tested natively.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
