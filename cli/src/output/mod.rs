//! CLI-specific output implementations
//!
//! This module turns rendered poll views into terminal text or JSON.

pub mod formatters;

pub use formatters::{JsonFormatter, OutputFormat, TextFormatter};
