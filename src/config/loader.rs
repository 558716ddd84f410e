//! Configuration file loading with precedence handling.

use crate::model::{RelaySettings, RelayUrl, SearchRelay};
use crate::state::ScreenSettings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RSEARCH_CONFIG";

/// Environment variable overriding the debounce quiet period (milliseconds).
pub const DEBOUNCE_ENV_VAR: &str = "RSEARCH_DEBOUNCE_MS";

/// Relays used when configuration does not list any.
pub const DEFAULT_SEARCH_RELAYS: [&str; 2] = ["wss://relay.nostr.band", "wss://search.nos.today"];

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or invalid values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rsearch/config.toml`.
///
/// ```toml
/// debounce_ms = 300
///
/// [[relays]]
/// url = "wss://relay.nostr.band"
///
/// [[relays]]
/// url = "wss://search.nos.today"
/// write = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Quiet period before typed input is committed.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Search-capable relays. Replaces the default list when present.
    #[serde(default)]
    pub relays: Option<Vec<RelayEntry>>,
}

/// One `[[relays]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RelayEntry {
    /// Validated on deserialization.
    pub url: RelayUrl,

    /// Serve queries from this relay. Defaults to true.
    #[serde(default = "default_true")]
    pub read: bool,

    /// Publish through this relay. Defaults to false.
    #[serde(default)]
    pub write: bool,
}

fn default_true() -> bool {
    true
}

impl From<RelayEntry> for SearchRelay {
    fn from(entry: RelayEntry) -> Self {
        SearchRelay::new(
            entry.url,
            RelaySettings {
                read: entry.read,
                write: entry.write,
            },
        )
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: u64,
    /// Search relays to provision.
    pub relays: Vec<SearchRelay>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            relays: default_search_relays(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settings for one activation of the search screen.
    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            relays: self.relays.clone(),
            quiet_period: Duration::from_millis(self.debounce_ms),
        }
    }
}

/// The built-in search relay list, read-only.
pub fn default_search_relays() -> Vec<SearchRelay> {
    DEFAULT_SEARCH_RELAYS
        .iter()
        .filter_map(|url| RelayUrl::new(*url).ok())
        .map(SearchRelay::read_only)
        .collect()
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rsearch/rsearch.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rsearch").join("rsearch.log")
    } else {
        PathBuf::from("rsearch.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors, including
/// relay URLs that fail validation.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rsearch/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rsearch").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RSEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/rsearch/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        relays: config
            .relays
            .map(|entries| entries.into_iter().map(SearchRelay::from).collect())
            .unwrap_or(defaults.relays),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RSEARCH_DEBOUNCE_MS`: Override debounce period (ignored unless a valid integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(ms) = std::env::var(DEBOUNCE_ENV_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
    {
        config.debounce_ms = ms;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    debounce_override: Option<u64>,
    relays_override: Option<Vec<SearchRelay>>,
) -> ResolvedConfig {
    if let Some(ms) = debounce_override {
        config.debounce_ms = ms;
    }

    if let Some(relays) = relays_override {
        config.relays = relays;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
