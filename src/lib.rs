//! # contact-book
//!
//! Leptos + WASM contact-list editor. Entries are edited through a form,
//! listed in a table, and mirrored to browser `localStorage` after every
//! change.
//!
//! The state layer (`state`, `util`) has no browser dependency outside the
//! `csr` feature, so it is tested natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::debug!("mounting contact book");
    leptos::mount::mount_to_body(app::App);
}
