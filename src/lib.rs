//! AgriPredict - landing site for AI-powered essential commodity price prediction
//!
//! Server-rendered with axum and hydrated in the browser as WebAssembly.
//! Page state (menus, the video, the prediction picker, the registration
//! form) lives in plain types under [`core`] so it can be tested natively;
//! [`ui`] holds the Leptos components that render it.

#![recursion_limit = "4096"]

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
