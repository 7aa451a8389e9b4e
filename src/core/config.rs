//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.itinerary/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The optional seed file replaces the built-in starting itinerary.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store::{ItemStore, StoreError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ItineraryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub pool_title: Option<String>,
    pub seed_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_descriptions: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "My Travel Itinerary";
pub const DEFAULT_POOL_TITLE: &str = "Available Places";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub pool_title: String,
    pub show_descriptions: bool,
    /// Absolute (or CLI-relative) path to a seed file; None = built-in seed.
    pub seed_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidSeed(StoreError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidSeed(e) => write!(f, "invalid seed data: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.itinerary/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".itinerary"))
}

/// Returns the path to `~/.itinerary/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `path`, or from `~/.itinerary/config.toml` when `path` is None.
///
/// A missing default config is generated (commented out) and treated as empty.
/// An explicitly requested file that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<ItineraryConfig, ConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ItineraryConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ItineraryConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<ItineraryConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ItineraryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Itinerary Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "My Travel Itinerary"
# pool_title = "Available Places"
# seed_file = "trip.toml"            # Path relative to ~/.itinerary/, or set ITINERARY_SEED_FILE

# [display]
# show_descriptions = true
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

/// Read and validate a seed file of `[[timeline]]` / `[[pool]]` items.
pub fn load_seed(path: &Path) -> Result<ItemStore, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let store: ItemStore = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    store.validate().map_err(ConfigError::InvalidSeed)?;
    info!(
        "Loaded seed from {} ({} timeline, {} pool)",
        path.display(),
        store.timeline.len(),
        store.pool.len()
    );
    Ok(store)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_seed` is the `--seed` flag (None = not specified).
pub fn resolve(config: &ItineraryConfig, cli_seed: Option<&Path>) -> ResolvedConfig {
    // Seed file: CLI → env → config. Config paths are relative to ~/.itinerary/
    let seed_file = cli_seed
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("ITINERARY_SEED_FILE").ok().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .seed_file
                .as_deref()
                .map(|file| resolve_config_relative(Path::new(file)))
        });

    ResolvedConfig {
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        pool_title: config
            .general
            .pool_title
            .clone()
            .unwrap_or_else(|| DEFAULT_POOL_TITLE.to_string()),
        show_descriptions: config.display.show_descriptions.unwrap_or(true),
        seed_file,
    }
}

fn resolve_config_relative(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

/// The store to start from: the configured seed file, or the built-in one.
pub fn initial_store(config: &ResolvedConfig) -> Result<ItemStore, ConfigError> {
    match &config.seed_file {
        Some(path) => load_seed(path),
        None => Ok(ItemStore::seeded()),
    }
}
