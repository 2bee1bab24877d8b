//! # secureai-client
//!
//! Leptos + WASM front end for the SecureAI dashboard: fake-content
//! detection, phishing-URL detection, and legal-document analysis with
//! follow-up Q&A.
//!
//! This crate contains pages, components, application state, and the
//! network layer. The document-analysis and fake-detection services are
//! mocked behind the same async seams a real backend would use; the
//! phishing check and sign-in post to their ad-hoc lab endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
