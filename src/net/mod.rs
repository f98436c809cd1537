//! Network layer: wire types and the backend auth API seam.

pub mod api;
pub mod types;
