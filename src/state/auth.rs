//! Authentication state and the facade that owns it.
//!
//! DESIGN
//! ======
//! The facade is the single writer of [`AuthState`]; consumers read snapshots
//! and subscribe to changes. Every transition replaces the whole state value.
//! Overlapping fetches are fenced with a generation counter so the
//! latest-issued request always decides the final state, regardless of the
//! order responses arrive in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;
use std::rc::Rc;

use log::warn;

use crate::config::AuthConfig;
use crate::net::api::{AuthApi, AuthError};
use crate::net::types::AuthenticatedUser;
use crate::state::cell::{StateCell, SubscriptionId};
use crate::util::navigator::Navigator;

/// Current authentication state.
///
/// `Ready` holds the latest user record, which may be the signed-out
/// sentinel; `Failed` holds the error that replaced it. Exactly one variant
/// exists at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Ready(AuthenticatedUser),
    Failed(AuthError),
}

impl Default for AuthState {
    fn default() -> Self {
        Self::Ready(AuthenticatedUser::not_connected())
    }
}

impl AuthState {
    /// The user record, if the last auth call succeeded.
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Ready(user) => Some(user),
            Self::Failed(_) => None,
        }
    }

    /// The error, if the last auth call failed.
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            Self::Ready(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}

struct FacadeInner<A, N> {
    api: A,
    navigator: N,
    config: AuthConfig,
    state: StateCell<AuthState>,
    fetch_generation: Cell<u64>,
}

/// Owner of the client-side authentication state.
///
/// Cheap to clone (shared `Rc` interior); the embedding application builds
/// one instance and passes it around explicitly.
pub struct AuthFacade<A, N> {
    inner: Rc<FacadeInner<A, N>>,
}

impl<A, N> Clone for AuthFacade<A, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: AuthApi, N: Navigator> AuthFacade<A, N> {
    /// Build a facade in the signed-out state. No network call is made until
    /// [`fetch`](Self::fetch).
    pub fn new(api: A, navigator: N, config: AuthConfig) -> Self {
        Self {
            inner: Rc::new(FacadeInner {
                api,
                navigator,
                config,
                state: StateCell::new(AuthState::default()),
                fetch_generation: Cell::new(0),
            }),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.inner.state.get()
    }

    /// Register a callback invoked with each state transition.
    pub fn subscribe(&self, notify: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        self.inner.state.subscribe(notify)
    }

    /// Remove a subscription registered with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.state.unsubscribe(id);
    }

    /// Whether an actual user (not the signed-out sentinel) is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .state
            .with(|state| state.user().is_some_and(AuthenticatedUser::is_connected))
    }

    /// Whether the signed-in user holds at least one of `authorities`.
    ///
    /// False in the error state, false for the signed-out sentinel, and a
    /// user record without an authorities field counts as having none.
    pub fn has_any_authority<S: AsRef<str>>(&self, authorities: &[S]) -> bool {
        self.inner.state.with(|state| {
            let Some(user) = state.user() else {
                return false;
            };
            if !user.is_connected() {
                return false;
            }
            let granted = user.granted_authorities();
            authorities
                .iter()
                .any(|wanted| granted.iter().any(|g| g == wanted.as_ref()))
        })
    }

    /// Single-authority form of [`has_any_authority`](Self::has_any_authority).
    pub fn has_authority(&self, authority: &str) -> bool {
        self.has_any_authority(&[authority])
    }

    /// Refresh the state from the backend.
    ///
    /// A 401 while a user is signed in means the backend session expired; the
    /// state quietly returns to signed-out instead of surfacing an error.
    /// Any other failure lands in [`AuthState::Failed`]. If another fetch was
    /// issued while this one was in flight, this response is stale and is
    /// dropped.
    pub async fn fetch(&self, force_resync: bool) {
        let generation = self.inner.fetch_generation.get().wrapping_add(1);
        self.inner.fetch_generation.set(generation);

        let result = self.inner.api.authenticated_user(force_resync).await;

        if self.inner.fetch_generation.get() != generation {
            // A newer fetch owns the outcome now.
            return;
        }

        match result {
            Ok(user) => self.inner.state.set(AuthState::Ready(user)),
            Err(err) if err.is_unauthorized() && self.is_authenticated() => {
                self.inner
                    .state
                    .set(AuthState::Ready(AuthenticatedUser::not_connected()));
            }
            Err(err) => {
                warn!("fetching the authenticated user failed: {err}");
                self.inner.state.set(AuthState::Failed(err));
            }
        }
    }

    /// Leave for the OAuth2 authorization endpoint.
    ///
    /// No local state change: the state updates only when the identity
    /// provider redirects back and a subsequent [`fetch`](Self::fetch) runs.
    pub fn login(&self) {
        let url = format!(
            "{}{}",
            self.inner.navigator.origin(),
            self.inner.config.login_path()
        );
        self.inner.navigator.navigate_to(&url);
    }

    /// End the backend session, reset the state to signed-out, then follow
    /// the identity provider's logout URL.
    ///
    /// On failure the state is left unchanged: claiming the user is signed
    /// out while the provider session survives would be worse than stale.
    pub async fn logout(&self) {
        match self.inner.api.logout().await {
            Ok(resp) => {
                self.inner
                    .state
                    .set(AuthState::Ready(AuthenticatedUser::not_connected()));
                self.inner.navigator.navigate_to(&resp.logout_url);
            }
            Err(err) => {
                warn!("logout request failed: {err}");
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl<A: AuthApi + 'static, N: Navigator + 'static> AuthFacade<A, N> {
    /// Fire-and-forget [`fetch`](Self::fetch) on the browser event loop.
    pub fn spawn_fetch(&self, force_resync: bool) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.fetch(force_resync).await });
    }

    /// Fire-and-forget [`logout`](Self::logout) on the browser event loop.
    pub fn spawn_logout(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.logout().await });
    }
}

#[cfg(feature = "hydrate")]
impl AuthFacade<crate::net::api::HttpAuthApi, crate::util::navigator::BrowserNavigator> {
    /// Facade wired to the real backend and `window.location`.
    pub fn browser(config: AuthConfig) -> Self {
        let api = crate::net::api::HttpAuthApi::new(&config);
        Self::new(api, crate::util::navigator::BrowserNavigator, config)
    }
}
