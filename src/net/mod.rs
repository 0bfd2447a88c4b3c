//! Network layer for the staging backend.
//!
//! Browser-only: the fetch helpers require a WASM environment and sit behind
//! the `web` feature. The request/response bodies themselves live in
//! [`crate::wire`] so they stay natively testable.

#[cfg(feature = "web")]
pub mod api;
