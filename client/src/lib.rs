//! # client
//!
//! Leptos + WASM frontend for the IPL Auction site. This crate owns the root
//! document shell (`<html lang="en">`/`<body>` wrapper), the static page
//! metadata, the global stylesheet link, and the route-level pages rendered
//! inside the shell.
//!
//! The `server` crate renders this app over SSR; the `hydrate` build of the
//! same crate re-attaches to the server-rendered DOM in the browser.

pub mod app;
pub mod pages;

/// Browser entry point: hydrate the server-rendered document in place.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
