// lib.rs - Root module for the catalog_browser library
//
// The crate is split in two layers:
// - catalog/: the loader, filter and session state (no UI dependencies)
// - web_app/: the Leptos view that renders a catalog session
//
// The catalog layer compiles for every target, including WASM, so the
// hydrated client filters with exactly the same code as the server.

pub mod catalog;

pub mod web_app;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
