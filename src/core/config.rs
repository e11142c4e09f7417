//! # Configuration
//!
//! Settings resolve in layers: defaults → config file → env vars.
//!
//! Config lives at `~/.ghost-term/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Environment variables (also read from `.env`) win over the file.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::ThemeMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GhostTermConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ghost: GhostConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub theme: Option<ThemeMode>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GhostConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_pages: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://jina-ai-gmbh.ghost.io";
pub const DEFAULT_TITLE: &str = "Jina AI";
pub const DEFAULT_SUBTITLE: &str = "Your Search Foundation, Supercharged!";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Upper bound on listing pages (100 posts each) before giving up.
pub const DEFAULT_MAX_PAGES: u32 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    pub max_pages: u32,
    pub title: String,
    pub subtitle: String,
    pub theme: ThemeMode,
    pub log_level: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.ghost-term/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ghost-term"))
}

/// Returns the path to `~/.ghost-term/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.ghost-term/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GhostTermConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GhostTermConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(GhostTermConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GhostTermConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<GhostTermConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GhostTermConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", redacted(&config));
    Ok(config)
}

/// Debug view of the config with the API key masked, for logging.
fn redacted(config: &GhostTermConfig) -> String {
    let key = if config.ghost.api_key.is_some() { "<set>" } else { "<unset>" };
    format!(
        "general={:?} base_url={:?} api_key={} timeout_secs={:?} max_pages={:?}",
        config.general,
        config.ghost.base_url,
        key,
        config.ghost.timeout_secs,
        config.ghost.max_pages
    )
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# ghost-term configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars (.env is honoured).

# [general]
# title = "Jina AI"
# subtitle = "Your Search Foundation, Supercharged!"
# theme = "dark"                      # "dark" or "light"
# log_level = "info"                  # Or set GHOST_TERM_LOG

# [ghost]
# api_key = "..."                     # Or set GHOST_API_KEY
# base_url = "https://jina-ai-gmbh.ghost.io"   # Or set GHOST_URL
# timeout_secs = 20                   # Or set GHOST_TIMEOUT_SECS
# max_pages = 1000                    # Listing pages of 100 posts
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &GhostTermConfig) -> ResolvedConfig {
    resolve_with(config, |name| std::env::var(name).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env.
///
/// `lookup` reads a variable by name; empty values count as unset.
pub fn resolve_with(
    config: &GhostTermConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    // API key: env → config
    let api_key = env("GHOST_API_KEY").or_else(|| config.ghost.api_key.clone());

    // Base URL: env → config → default
    let base_url = env("GHOST_URL")
        .or_else(|| config.ghost.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: env → config → default
    let timeout_secs = env("GHOST_TIMEOUT_SECS")
        .and_then(|v| match v.parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!("Ignoring invalid GHOST_TIMEOUT_SECS '{}': {}", v, e);
                None
            }
        })
        .or(config.ghost.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
        .max(1);

    let log_level = env("GHOST_TERM_LOG")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        max_pages: config.ghost.max_pages.unwrap_or(DEFAULT_MAX_PAGES).max(1),
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        subtitle: config
            .general
            .subtitle
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
        theme: config.general.theme.unwrap_or_default(),
        log_level,
    }
}
