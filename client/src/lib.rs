//! # timeconverter
//!
//! Leptos + WASM single-page app showing the weekly meeting time across
//! zones and converting a picked zone/date/hour to California time.
//!
//! All time zone rules live in the `zones` crate; this crate owns the
//! components, their per-instance reactive state and the browser entry point.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Browser entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
