//! Minimal configuration module for pollview core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{ResolvedApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
