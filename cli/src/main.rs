//! # pollview CLI
//!
//! Command-line interface for pollview - render polls from a poll service.
//!
//! ## Usage
//!
//! - `pollview` - Start interactive mode
//! - `pollview /poll/42` - Render one poll and exit
//! - `pollview --poll-id 42 --format json` - Same, as JSON
//! - `pollview interactive /poll/42` - Start interactive mode on a poll

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod interactive;
mod output;
mod router;

use commands::{interactive_command, show_command, ShowOptions};
use config::CliConfigLoader;
use output::OutputFormat;

/// pollview - Render polls from a poll service in the terminal
#[derive(Parser)]
#[command(name = "pollview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render polls from a poll service in the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the poll service
    #[arg(long, env = "POLLVIEW_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "POLLVIEW_TIMEOUT")]
    timeout: Option<u64>,

    /// Output format for one-shot rendering
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Poll identifier, shorthand for the path /poll/<ID>
    #[arg(long)]
    poll_id: Option<String>,

    /// Path to render, e.g. /poll/42 (if provided, renders once and exits)
    path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse polls interactively
    Interactive {
        /// Path to open on start
        path: Option<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout_override(timeout);
    }

    loader
}

/// The one-shot path named by the positional argument or `--poll-id`
fn one_shot_path(cli: &Cli) -> Result<Option<String>> {
    match (&cli.path, &cli.poll_id) {
        (Some(_), Some(_)) => bail!("Pass either a path or --poll-id, not both"),
        (Some(path), None) => Ok(Some(path.clone())),
        (None, Some(poll_id)) => Ok(Some(format!("/poll/{}", poll_id))),
        (None, None) => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    pollview_core::init_tracing_with_debug(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_loader = build_config_loader(&cli);
    let path = one_shot_path(&cli)?;

    match (path, cli.command) {
        (Some(path), None) => {
            let options = ShowOptions {
                format: cli.format,
                color: !cli.no_color,
            };
            show_command(path, config_loader, options).await
        }
        (None, Some(Commands::Interactive { path })) => {
            interactive_command(config_loader, path).await?;
            Ok(ExitCode::SUCCESS)
        }
        (None, None) => {
            interactive_command(config_loader, None).await?;
            Ok(ExitCode::SUCCESS)
        }
        (Some(_), Some(_)) => bail!("A path cannot be combined with a subcommand"),
    }
}
