//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `cell` is the generic publish-on-write container; `auth` holds the
//! authentication state and the facade that owns it. Components depend on the
//! facade's read-only surface, never on the cell directly.

pub mod auth;
pub mod cell;
