//! # docsight-client
//!
//! Leptos + WASM frontend for the docsight document-analysis product: the
//! public marketing pages, the login/signup flow, and the signed-in dashboard.
//!
//! This crate contains pages, components, application state, the session
//! store and route guard, the backend contract with its mock and HTTP
//! implementations, and durable browser storage. The `server` crate renders
//! it with `ssr`; the browser bundle is built with `hydrate`.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
