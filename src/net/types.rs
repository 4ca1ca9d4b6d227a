//! Wire types for the authentication endpoints.

use serde::{Deserialize, Serialize};

/// Success body of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"Bearer"`.
    #[serde(default)]
    pub token_type: String,
}

/// JSON body for account registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
}
