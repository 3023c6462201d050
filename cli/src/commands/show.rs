//! One-shot poll rendering command

use crate::output::{JsonFormatter, OutputFormat, TextFormatter};
use crate::router::{app_router_config, AppRoute, Router};
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pollview_core::view::LOADING_MESSAGE;
use pollview_core::{load_outcome, HttpPollClient, PollDetailView, ViewKind};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};

/// Options of the one-shot command
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub format: OutputFormat,
    pub color: bool,
}

/// Render the poll behind `path` once and print it
pub async fn show_command(
    path: String,
    config_loader: crate::config::CliConfigLoader,
    options: ShowOptions,
) -> Result<ExitCode> {
    let router = Router::new(app_router_config()?)?;
    let matched = router.resolve(&path)?;
    let poll_id = match AppRoute::from_match(&matched)? {
        AppRoute::PollDetail(poll_id) => poll_id,
        AppRoute::Home => bail!("'{}' does not name a poll; expected /poll/<pollId>", path),
    };

    let config = config_loader.load().await?;
    info!("Using poll service at {}", config.base_url);
    let client = HttpPollClient::new(config).context("Failed to create poll client")?;

    let (mut view, ticket) = PollDetailView::mount(poll_id);

    let spinner = loading_spinner(options.format);
    let outcome = load_outcome(&client, ticket.poll_id()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    view.complete(&ticket, outcome);
    debug!("Final state for {}: {}", view.poll_id(), view.state().kind());

    match options.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(options.color).format(&view.render()));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new().format(&view)?);
        }
    }

    Ok(exit_code_for(view.state().kind()))
}

/// Spinner on stderr showing the loading rendering while the fetch runs
fn loading_spinner(format: OutputFormat) -> Option<ProgressBar> {
    if format != OutputFormat::Text || !std::io::stderr().is_terminal() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(LOADING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Exit status for a terminal view state
pub fn exit_code_for(kind: ViewKind) -> ExitCode {
    match kind {
        ViewKind::Loaded | ViewKind::Loading => ExitCode::SUCCESS,
        ViewKind::Error => ExitCode::from(1),
        ViewKind::NotFound => ExitCode::from(2),
    }
}
