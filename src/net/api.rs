//! Backend auth API seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Tests and server-side builds supply their own [`AuthApi`] implementation,
//! so nothing here requires a browser to exercise.
//!
//! ERROR HANDLING
//! ==============
//! Failures become [`AuthError`] values. The facade stores them in its state
//! cell instead of propagating them upward, so a failed call degrades the UI
//! without crashing hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{AuthenticatedUser, LogoutResponse};

/// An auth call that did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not deserialize to the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl AuthError {
    /// HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Whether this is an HTTP 401 response.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// The two backend calls the facade depends on.
///
/// Futures are not `Send`; this crate targets the single-threaded browser
/// event loop.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Fetch the currently authenticated user from
    /// `GET /auth/get-authenticated-user?forceResync={force_resync}`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn authenticated_user(&self, force_resync: bool)
    -> Result<AuthenticatedUser, AuthError>;

    /// End the backend session via `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn logout(&self) -> Result<LogoutResponse, AuthError>;
}

/// [`AuthApi`] implementation over the real backend.
#[cfg(feature = "hydrate")]
pub struct HttpAuthApi {
    api_base: String,
}

#[cfg(feature = "hydrate")]
impl HttpAuthApi {
    pub fn new(config: &crate::config::AuthConfig) -> Self {
        Self {
            api_base: config.api_base.clone(),
        }
    }

    async fn read_body<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, AuthError> {
        if !resp.ok() {
            return Err(AuthError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
impl AuthApi for HttpAuthApi {
    async fn authenticated_user(
        &self,
        force_resync: bool,
    ) -> Result<AuthenticatedUser, AuthError> {
        let url = format!(
            "{}/auth/get-authenticated-user?forceResync={force_resync}",
            self.api_base
        );
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Self::read_body(resp).await
    }

    async fn logout(&self) -> Result<LogoutResponse, AuthError> {
        let url = format!("{}/auth/logout", self.api_base);
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({}))
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Self::read_body(resp).await
    }
}
