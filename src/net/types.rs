#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Reserved email value the backend uses in place of a "no user" variant.
pub const NOT_CONNECTED: &str = "NOT_CONNECTED";

/// The signed-in principal as returned by
/// `GET /auth/get-authenticated-user`.
///
/// A record with the [`NOT_CONNECTED`] sentinel email means no user is signed
/// in. `authorities` may be absent for users without any granted roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,
}

impl AuthenticatedUser {
    /// The signed-out sentinel record.
    pub fn not_connected() -> Self {
        Self {
            email: NOT_CONNECTED.to_owned(),
            authorities: None,
        }
    }

    /// Whether this record represents an actual signed-in user.
    pub fn is_connected(&self) -> bool {
        self.email != NOT_CONNECTED
    }

    /// Granted authorities, with an absent field read as the empty set.
    pub fn granted_authorities(&self) -> &[String] {
        self.authorities.as_deref().unwrap_or_default()
    }
}

/// Response body of `POST /auth/logout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(rename = "logoutUrl")]
    pub logout_url: String,
}
