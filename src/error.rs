//! Session error kinds surfaced to the views.

use thiserror::Error;

/// Failures produced by session operations.
///
/// `Network` carries the transport or server failure text unchanged so views
/// can show it to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Credentials rejected before any network call is made.
    #[error("Please enter a valid username/password")]
    Validation,

    /// Transport or HTTP failure from the token or register endpoints.
    #[error("{0}")]
    Network(String),

    /// The bearer token payload could not be decoded.
    #[error("malformed token: {0}")]
    Decode(String),
}
