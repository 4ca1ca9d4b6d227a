//! Token persistence.
//!
//! Two browser scopes share one interface: `localStorage` survives restarts,
//! `sessionStorage` ends with the browsing session. Readers elsewhere always
//! prefer the durable scope.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key holding the raw bearer token in either scope.
pub const TOKEN_KEY: &str = "token";

/// Synchronous key-value slot for the raw token. Last writer wins; clearing
/// an absent token is a no-op.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Which browser storage area backs a [`BrowserStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageArea {
    Local,
    Session,
}

/// Browser-backed token store. Inert off-browser so native builds and tests
/// compile the same call sites.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    area: StorageArea,
}

impl BrowserStore {
    /// Durable scope: survives browser restarts.
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    /// Ephemeral scope: cleared when the browsing session ends.
    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    #[cfg(feature = "csr")]
    fn raw(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            StorageArea::Local => window.local_storage().ok().flatten(),
            StorageArea::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl TokenStore for BrowserStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.raw()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = self.raw() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = self.raw() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory store for tests and native use. Clones share the slot, so a
/// fresh manager constructed over a clone sees the same persisted token.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
