//! # client
//!
//! Leptos + WASM frontend for the profile application: a header with a
//! sign-in/sign-up dropdown, login and signup forms, and the client-side
//! session backed by `localStorage`.
//!
//! This crate contains pages, components, application state, and the REST
//! auth client. The root `profile` binary renders it with SSR; the `hydrate`
//! feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(test)]
mod test_support;

/// Browser entry point for the `hydrate` bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
