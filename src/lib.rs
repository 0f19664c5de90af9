//! # econsult
//!
//! Leptos + WASM frontend for the MCA eConsultation review workflow.
//! All business logic (sentiment scoring, summarization, PDF generation,
//! persistence) lives in an external REST backend; this crate owns the
//! session credential, the typed API client, the sentiment heatmap
//! aggregation, and the dashboard view state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
