//! # portal-client
//!
//! Leptos + WASM frontend for the subscription portal: a register/login form
//! and a subscription dashboard backed by a remote JSON API.
//!
//! This crate contains the root component, the two panel components, their
//! state machines, and the REST client. Built with `hydrate` it runs in the
//! browser; built with `ssr` it renders the initial HTML for `portal-server`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entrypoint: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
