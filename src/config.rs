// Configuration loading and parsing (matchday.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sheet: SheetConfig,
    #[serde(default)]
    pub teams: TeamNames,
    #[serde(default)]
    pub allocation: AllocationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Share link to the roster spreadsheet. May be overridden by the first
    /// CLI argument.
    pub url: String,
}

/// Display names for the two generated teams.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamNames {
    #[serde(default = "default_name_a")]
    pub name_a: String,
    #[serde(default = "default_name_b")]
    pub name_b: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllocationConfig {
    /// Optional fixed seed for the draw. Leave unset for a fresh random draw
    /// per run; set for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_name_a() -> String {
    "Team A".to_string()
}

fn default_name_b() -> String {
    "Team B".to_string()
}

impl Default for TeamNames {
    fn default() -> Self {
        TeamNames {
            name_a: default_name_a(),
            name_b: default_name_b(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a config document. Split out from `load_config` so tests can feed
/// inline TOML without touching the filesystem.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    parse_config(&text, path)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.teams.name_a.trim().is_empty() || config.teams.name_b.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "teams".into(),
            message: "team display names must not be empty".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
