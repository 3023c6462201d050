//! # pollview Core
//!
//! Core library for pollview - a terminal client for a poll service.
//!
//! This library provides the poll data model, the [`PollSource`] abstraction
//! with its HTTP implementation, and the poll detail view: a small state
//! machine driving one fetch per poll identifier plus a pure renderer over
//! its state.

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod poll;
pub mod view;

// Re-export commonly used types
pub use client::{HttpPollClient, PollSource};
pub use config::ResolvedApiConfig;
pub use poll::{Choice, ChoiceLabel, Poll, PollId, Question};
pub use view::{
    load_outcome, render, LoadOutcome, LoadTicket, PollDetailView, RenderedView, ViewKind,
    ViewState,
};

/// Current version of the pollview-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
