//! Authentication REST transport.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: inert stubs that fail with a network error, so the rest of
//! the crate stays compilable and testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface the response body text unchanged (the server
//! answers plain text like `Invalid Credentials`), falling back to the status
//! code, so views can display it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::Serialize;

use crate::error::SessionError;
use crate::net::types::Registration;
#[cfg(feature = "csr")]
use crate::net::types::TokenResponse;

pub const TOKEN_ENDPOINT: &str = "/api/token";
pub const REGISTER_ENDPOINT: &str = "/account/register";

/// Credential exchange and account registration, injectable so tests can
/// fake the network.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// Exchange credentials for a raw bearer token.
    ///
    /// # Errors
    ///
    /// [`SessionError::Network`] carrying the failure text of the endpoint.
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, SessionError>;

    /// Create a new account. Any 2xx is success; the body is ignored.
    ///
    /// # Errors
    ///
    /// [`SessionError::Network`] carrying the failure text of the endpoint.
    async fn register(&self, registration: &Registration) -> Result<(), SessionError>;
}

#[cfg(any(test, feature = "csr"))]
#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
    grant_type: &'a str,
}

/// OAuth2 password-grant form body for the token endpoint.
#[cfg(any(test, feature = "csr"))]
fn token_request_body(username: &str, password: &str) -> Result<String, SessionError> {
    serde_urlencoded::to_string(TokenRequest {
        username,
        password,
        grant_type: "password",
    })
    .map_err(|e| SessionError::Network(e.to_string()))
}

/// Failure text for a non-2xx response: the body when the server sent one,
/// otherwise a status-code fallback.
#[cfg(any(test, feature = "csr"))]
fn response_failure_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed: {status}")
    } else {
        trimmed.to_owned()
    }
}

#[cfg(feature = "csr")]
fn transport_error(e: &gloo_net::Error) -> SessionError {
    SessionError::Network(e.to_string())
}

/// HTTP implementation of [`AuthTransport`] used by the running app.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl AuthTransport for HttpTransport {
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, SessionError> {
        #[cfg(feature = "csr")]
        {
            let body = token_request_body(username, password)?;
            let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body)
                .map_err(|e| transport_error(&e))?
                .send()
                .await
                .map_err(|e| transport_error(&e))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(SessionError::Network(response_failure_message(
                    resp.status(),
                    &text,
                )));
            }
            let token: TokenResponse = resp.json().await.map_err(|e| transport_error(&e))?;
            Ok(token.access_token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password);
            Err(SessionError::Network(
                "not available outside the browser".to_owned(),
            ))
        }
    }

    async fn register(&self, registration: &Registration) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
                .json(registration)
                .map_err(|e| transport_error(&e))?
                .send()
                .await
                .map_err(|e| transport_error(&e))?;
            if resp.ok() {
                Ok(())
            } else {
                let text = resp.text().await.unwrap_or_default();
                Err(SessionError::Network(response_failure_message(
                    resp.status(),
                    &text,
                )))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            Err(SessionError::Network(
                "not available outside the browser".to_owned(),
            ))
        }
    }
}
