//! Interactive mode command

use crate::interactive::run_interactive;
use anyhow::Result;
use tracing::{debug, info};

/// Start interactive mode, optionally opening `initial_path` first
pub async fn interactive_command(
    config_loader: crate::config::CliConfigLoader,
    initial_path: Option<String>,
) -> Result<()> {
    let config = config_loader.load().await?;
    info!("Using poll service at {}", config.base_url);
    debug!("Request timeout: {}s", config.timeout_secs);

    if let Some(path) = &initial_path {
        debug!("Opening {} on start", path);
    }

    run_interactive(config, initial_path).await
}
