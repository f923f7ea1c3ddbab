//! HTTP client services (REST).

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
