//! relay-search - Entry Point

use clap::Parser;
use relay_search::model::{search_path, Keyword, RelayUrl, SearchRelay, SEARCH_PATH_PREFIX};
use relay_search::services::{HistoryNavigator, LocalRelayRegistry};
use std::path::PathBuf;
use tracing::info;

/// relay-search - search posts and profiles across search relays
#[derive(Parser, Debug)]
#[command(name = "rsearch")]
#[command(version)]
#[command(about = "Terminal search screen over a federated relay network")]
pub struct Args {
    /// Navigation path (`/search/<keyword>`) or bare keyword to open with
    pub target: Option<String>,

    /// Quiet period in milliseconds before typed input is searched
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Search relay to use (repeatable; replaces configured relays)
    #[arg(long = "relay", value_name = "URL", value_parser = parse_relay_url)]
    pub relays: Vec<RelayUrl>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug events when RUST_LOG is unset
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_relay_url(raw: &str) -> Result<RelayUrl, String> {
    RelayUrl::new(raw).map_err(|e| e.to_string())
}

/// Navigation path the screen opens at.
///
/// Paths are taken as-is; a bare keyword becomes `/search/<keyword>`.
fn start_path(target: Option<&str>) -> String {
    match target {
        Some(path) if path.starts_with('/') => path.to_string(),
        Some(raw) => Keyword::new(raw)
            .map(|keyword| search_path(&keyword))
            .unwrap_or_else(|_| SEARCH_PATH_PREFIX.to_string()),
        None => SEARCH_PATH_PREFIX.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = relay_search::config::load_config_with_precedence(args.config.clone())?;
        let merged = relay_search::config::merge_config(config_file);
        let with_env = relay_search::config::apply_env_overrides(merged);

        let relays_override = if args.relays.is_empty() {
            None
        } else {
            Some(
                args.relays
                    .iter()
                    .cloned()
                    .map(SearchRelay::read_only)
                    .collect(),
            )
        };

        relay_search::config::apply_cli_overrides(with_env, args.debounce_ms, relays_override)
    };

    relay_search::logging::init(&config.log_file_path, args.verbose)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let navigator = HistoryNavigator::new(start_path(args.target.as_deref()));
    let registry = LocalRelayRegistry::new();

    relay_search::view::run_search_screen(&config.screen_settings(), navigator, registry)?;

    Ok(())
}
