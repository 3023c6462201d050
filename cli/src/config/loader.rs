//! Simple CLI configuration loader for pollview
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./pollview.json or ./.pollview/config.json
//! 3. Git repository root: <repo_root>/.pollview/config.json
//! 4. User config dir: <config_dir>/pollview/config.json
//! 5. Built-in defaults (no files)
//!
//! `--base-url` / `POLLVIEW_BASE_URL` and `--timeout` / `POLLVIEW_TIMEOUT`
//! override whatever the file says.

use anyhow::{anyhow, Context, Result};
use pollview_core::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use pollview_core::ResolvedApiConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "pollview.json";
const CONFIG_DIR_NAME: &str = ".pollview";

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Base URL of the poll service
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Additional headers (optional); values may be "env:VAR_NAME"
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    base_url_override: Option<String>,
    timeout_override: Option<u64>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set timeout override
    pub fn with_timeout_override(mut self, timeout_secs: u64) -> Self {
        self.timeout_override = Some(timeout_secs);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedApiConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let expanded = expand_path(override_path)?;
            self.load_from_path(&expanded).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        self.apply_overrides(&mut config);

        // Step 3: Resolve to final config
        resolve_config(config)
    }

    fn apply_overrides(&self, config: &mut RawConfig) {
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout_override {
            config.timeout_secs = Some(timeout);
        }
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        let cwd = std::env::current_dir()?;

        // 1. Current working directory
        if let Some(config) = self.try_load_dir(&cwd).await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(git_root) = find_git_root(&cwd) {
            let config_path = git_root.join(CONFIG_DIR_NAME).join("config.json");
            if config_path.exists() {
                return self.load_file(&config_path).await;
            }
        }

        // 3. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("pollview").join("config.json");
            if config_path.exists() {
                return self.load_file(&config_path).await;
            }
        }

        // 4. Defaults only
        debug!("No config file found, using defaults");
        Ok(RawConfig::default())
    }

    /// Try `<dir>/pollview.json`, then `<dir>/.pollview/config.json`
    async fn try_load_dir(&self, dir: &Path) -> Result<Option<RawConfig>> {
        let direct = dir.join(CONFIG_FILE_NAME);
        if direct.exists() {
            return Ok(Some(self.load_file(&direct).await?));
        }

        let nested = dir.join(CONFIG_DIR_NAME).join("config.json");
        if nested.exists() {
            return Ok(Some(self.load_file(&nested).await?));
        }

        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading config file {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Expand `~` and environment variables in a user-supplied path
fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand config path: {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Find git repository root
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Resolve raw config to ResolvedApiConfig
fn resolve_config(config: RawConfig) -> Result<ResolvedApiConfig> {
    // Resolve headers (handle env: prefix)
    let mut headers = HashMap::new();
    for (key, value) in config.headers {
        let value = match value.strip_prefix("env:") {
            Some(var_name) => std::env::var(var_name)
                .with_context(|| format!("Environment variable not found: {}", var_name))?,
            None => value,
        };
        headers.insert(key, value);
    }

    let resolved = ResolvedApiConfig::new(
        config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    )
    .with_timeout_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    .with_headers(headers);

    resolved
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(resolved)
}
