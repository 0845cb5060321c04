//! DocBoard - in-memory document dashboard
//!
//! A small Leptos application: a home page, sign-in and sign-up screens and a
//! dashboard for adding, editing and removing documents. Nothing is persisted.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
