#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Configuration for the auth facade, passed at construction time.
///
/// There is no ambient/global configuration: the embedding application builds
/// one of these and hands it to [`crate::state::auth::AuthFacade`].
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Base URL for backend API calls, without a trailing slash.
    pub api_base: String,
    /// The application's base href, used to resolve the OAuth login path.
    /// Browsers normalize this to end with a slash.
    pub base_href: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_owned(),
            base_href: "/".to_owned(),
        }
    }
}

impl AuthConfig {
    /// Path of the OAuth2 authorization redirect, resolved against the
    /// application's base href.
    pub fn login_path(&self) -> String {
        if self.base_href.ends_with('/') {
            format!("{}oauth2/authorization/okta", self.base_href)
        } else {
            format!("{}/oauth2/authorization/okta", self.base_href)
        }
    }
}
