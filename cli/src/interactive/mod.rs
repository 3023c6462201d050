//! Interactive mode
//!
//! A full-screen iocraft application: type a path, the router resolves it
//! and the poll detail page follows the loads it starts.

pub mod app;
pub mod loader;
pub mod pages;

pub use app::run_interactive;
