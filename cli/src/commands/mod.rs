//! CLI command implementations

pub mod interactive;
pub mod show;

pub use interactive::interactive_command;
pub use show::{show_command, ShowOptions};
