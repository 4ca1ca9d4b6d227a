//! Authentication session: token lifecycle, persistence, and notifications.
//!
//! DESIGN
//! ======
//! [`SessionManager`] is the single point of truth for "who is logged in".
//! Storage scopes and the network transport are injected traits so the
//! browser app and the native tests run the same logic.

pub mod events;
pub mod manager;
pub mod store;
pub mod token;

pub use events::{SessionEvent, SessionEvents};
pub use manager::SessionManager;
pub use store::{BrowserStore, MemoryStore, TokenStore};
pub use token::{Identity, decode_identity};

use crate::net::api::HttpTransport;

/// Session wired to the browser: gloo-net transport, `localStorage` as the
/// durable scope, `sessionStorage` as the ephemeral scope.
pub type AppSession = SessionManager<HttpTransport, BrowserStore>;

/// Construct the app-wide session, restoring any persisted sign-in.
pub fn browser_session() -> AppSession {
    SessionManager::new(HttpTransport, BrowserStore::local(), BrowserStore::session())
}
