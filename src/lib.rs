//! # portal-ui
//!
//! Leptos + WASM single-page application shell: home, registration, login,
//! logout and account pages wired to a client-side router, over a
//! session/authentication core that exchanges credentials for a bearer token
//! and persists it in browser storage.
//!
//! The session core (`session`) is plain Rust behind storage/transport
//! traits; everything browser-specific is gated behind the `csr` feature so
//! the crate compiles and tests natively.

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// Mount the application. Browser-only; a no-op without the `csr` feature.
pub fn start() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(app::App);
    }
}
