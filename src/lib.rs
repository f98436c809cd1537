//! # booking-client-auth
//!
//! Client-side authentication state for the booking application's WASM
//! frontend. The crate owns the signed-in state, exposes it through an
//! observable state cell, and mediates the auth calls against the backend
//! (`/auth/get-authenticated-user`, `/auth/logout`) plus the OAuth2 login
//! redirect.
//!
//! Browser-only code (HTTP via `gloo-net`, navigation via `web-sys`) is gated
//! behind the `hydrate` feature; everything else builds and tests natively.

pub mod config;
pub mod net;
pub mod state;
pub mod util;
