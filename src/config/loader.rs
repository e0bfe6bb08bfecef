//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::PaperFormat;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "INKCALC_CONFIG";
/// Env var overriding the usage counter record path.
pub const COUNTER_FILE_ENV: &str = "INKCALC_COUNTER_FILE";
/// Env var overriding the log file path.
pub const LOG_FILE_ENV: &str = "INKCALC_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or an unknown key.
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
/// Corresponds to `~/.config/inkcalc/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the usage counter JSON record.
    #[serde(default)]
    pub counter_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Format preselected when the form opens ("A3" or "A4").
    #[serde(default)]
    pub default_format: Option<PaperFormat>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Usage counter record.
    pub counter_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Preselected paper format.
    pub default_format: PaperFormat,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            counter_path: default_counter_path(),
            log_file_path: default_log_path(),
            default_format: PaperFormat::A3,
        }
    }
}

/// Overrides taken from command-line flags. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// From `--counter-file`.
    pub counter_path: Option<PathBuf>,
    /// From `--log-file`.
    pub log_file_path: Option<PathBuf>,
    /// From `--format`.
    pub default_format: Option<PaperFormat>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/inkcalc/inkcalc.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("inkcalc").join("inkcalc.log")
    } else {
        PathBuf::from("inkcalc.log")
    }
}

/// Resolve default usage counter path.
///
/// Returns `~/.local/share/inkcalc/usage_counter.json` on Unix-like systems.
/// Falls back to `usage_counter.json` in the current directory.
pub fn default_counter_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("inkcalc").join("usage_counter.json")
    } else {
        PathBuf::from("usage_counter.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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
/// Returns `~/.config/inkcalc/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inkcalc").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `INKCALC_CONFIG` environment variable
/// 3. Default path `~/.config/inkcalc/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        counter_path: config.counter_path.unwrap_or(defaults.counter_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        default_format: config.default_format.unwrap_or(defaults.default_format),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `INKCALC_COUNTER_FILE`: Override counter record path
/// - `INKCALC_LOG_FILE`: Override log file path
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = non_empty_env(COUNTER_FILE_ENV) {
        config.counter_path = path;
    }

    if let Some(path) = non_empty_env(LOG_FILE_ENV) {
        config.log_file_path = path;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(path) = overrides.counter_path {
        config.counter_path = path;
    }

    if let Some(path) = overrides.log_file_path {
        config.log_file_path = path;
    }

    if let Some(format) = overrides.default_format {
        config.default_format = format;
    }

    config
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
