//! # eventleads-client
//!
//! Leptos + WASM frontend for the event-form builder: auth flows, invitation
//! acceptance, organization onboarding, events and forms listings, and the
//! form builder shell.
//!
//! This crate contains pages, components, view-state models, the REST
//! wrappers for the backend API, and the session store. The `ssr` build is
//! rendered by `eventleads-server`; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, then hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
