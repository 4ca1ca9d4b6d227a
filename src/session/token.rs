//! Bearer-token payload decoding.
//!
//! Tokens are opaque JWT strings issued by the server; only the middle
//! (payload) segment is read here. The signature is never verified:
//! validity is the server's concern.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Decoded claims of the current bearer token: the signed-in user.
///
/// Unknown claims (`iss`, `jti`, ...) are ignored; missing claims default so
/// a sparse payload still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub username: String,
    /// Subject claim: the server-side user id.
    #[serde(default)]
    pub sub: String,
    /// Expiry as Unix seconds. Exposed for display, never enforced locally.
    #[serde(default)]
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Decode the payload segment of `token` into an [`Identity`].
///
/// # Errors
///
/// Returns [`SessionError::Decode`] when the token is not dot-separated
/// segments with a base64url JSON payload. Callers treat that as "not
/// authenticated" rather than a fatal condition.
pub fn decode_identity(token: &str) -> Result<Identity, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| SessionError::Decode("missing payload segment".to_owned()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| SessionError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::Decode(e.to_string()))
}
