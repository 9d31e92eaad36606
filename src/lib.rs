//! # postboard
//!
//! Leptos + WASM client for a blog post manager backed by a small REST API:
//! listing, creating, editing, deleting, relevance search, and draft
//! generation via a content-generation endpoint.
//!
//! This crate contains the page, components, application state, wire
//! types, and the REST operation dispatchers. State transitions live on
//! plain structs in `state` so the whole interaction layer is testable
//! under native `cargo test`; browser I/O is confined to `net` behind the
//! `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
