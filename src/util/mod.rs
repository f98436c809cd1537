//! Browser capability shims.

pub mod navigator;
