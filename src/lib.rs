//! # sitestock
//!
//! Leptos + WASM front end for logging material deliveries on a construction
//! site. The server renders each page; hydration attaches browser behavior
//! on top of the same markup.
//!
//! This crate contains pages, components, domain state, and the utility
//! layer (document wiring, browser storage, formatting, user feedback).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
