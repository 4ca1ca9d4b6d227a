//! Session lifecycle: the single owner of the bearer token and the
//! authenticated identity.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::RefCell;

use crate::error::SessionError;
use crate::net::api::AuthTransport;
use crate::net::types::Registration;
use crate::session::events::{SessionEvent, SessionEvents};
use crate::session::store::TokenStore;
use crate::session::token::{Identity, decode_identity};

/// Single point of truth for "who is logged in".
///
/// The only component allowed to touch credential storage or issue
/// authentication network calls. Transport and both storage scopes are
/// injected so tests can supply fakes
/// ([`MemoryStore`](crate::session::store::MemoryStore), stub transports).
pub struct SessionManager<T, S> {
    transport: T,
    durable: S,
    ephemeral: S,
    events: SessionEvents,
    identity: RefCell<Option<Identity>>,
}

impl<T, S> SessionManager<T, S>
where
    T: AuthTransport,
    S: TokenStore,
{
    /// Build a session over the given transport and storage scopes, restoring
    /// the identity from whichever scope already holds a token (durable
    /// first). A malformed stored token reads as signed out.
    pub fn new(transport: T, durable: S, ephemeral: S) -> Self {
        let identity = durable
            .load()
            .or_else(|| ephemeral.load())
            .and_then(|token| decode_identity(&token).ok());
        Self {
            transport,
            durable,
            ephemeral,
            events: SessionEvents::new(),
            identity: RefCell::new(identity),
        }
    }

    /// Exchange credentials for a bearer token and enter the authenticated
    /// state.
    ///
    /// The token lands in durable storage when `remember` is set, otherwise
    /// in ephemeral storage; exactly one scope, never both. Emits
    /// [`SessionEvent::LoggedIn`] on success.
    ///
    /// # Errors
    ///
    /// [`SessionError::Validation`] for credentials rejected before any
    /// network call, [`SessionError::Network`] carrying the token endpoint's
    /// failure text, [`SessionError::Decode`] for an unreadable token. On any
    /// failure neither storage nor the identity is touched.
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<(), SessionError> {
        if username.chars().count() <= 1 || password.chars().count() <= 5 {
            return Err(SessionError::Validation);
        }
        let token = self.transport.request_token(username, password).await?;
        // Decode before persisting: a bad token must not leave partial state.
        let identity = decode_identity(&token)?;
        if remember {
            self.durable.save(&token);
        } else {
            self.ephemeral.save(&token);
        }
        *self.identity.borrow_mut() = Some(identity);
        self.events.emit(SessionEvent::LoggedIn);
        Ok(())
    }

    /// Leave the authenticated state. Cannot fail and is idempotent: both
    /// storage scopes are cleared whether or not they hold a token. Emits
    /// [`SessionEvent::LoggedOut`]. No network call.
    pub fn sign_out(&self) {
        self.durable.clear();
        self.ephemeral.clear();
        *self.identity.borrow_mut() = None;
        self.events.emit(SessionEvent::LoggedOut);
    }

    /// Create a new account. Emits [`SessionEvent::Registered`] on success;
    /// no token is acquired or stored either way.
    ///
    /// # Errors
    ///
    /// Propagates the transport failure unchanged, with no state mutation and
    /// no event.
    pub async fn register(&self, registration: &Registration) -> Result<(), SessionError> {
        self.transport.register(registration).await?;
        self.events.emit(SessionEvent::Registered);
        Ok(())
    }

    /// The currently authenticated identity, if any.
    pub fn current_user(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// The raw stored token: durable scope first, then ephemeral.
    pub fn token(&self) -> Option<String> {
        self.durable.load().or_else(|| self.ephemeral.load())
    }

    /// Whether a token is present in either scope. Presence only: an
    /// expired-but-present token still reads as logged in until cleared.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Expiry of the current identity as Unix seconds, for display.
    pub fn expires_at(&self) -> Option<i64> {
        self.identity.borrow().as_ref().map(|user| user.exp)
    }

    /// Notification bus for session-state transitions.
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }
}
