//! Configuration module for the spread scanner.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it. Every section has defaults, so an absent default config
//! file is not an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spread_scanner::config::load_config;
//!
//! // Load from ./spread-scanner.yaml when present, else defaults
//! let config = load_config(None)?;
//!
//! // Load from custom path (must exist)
//! let config = load_config(Some("custom/scanner.yaml"))?;
//! ```

mod constraints;
mod observability;
mod source;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalizer::ColumnLabels;

pub use constraints::ConstraintsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use source::{DEFAULT_URL, SourceConfig};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "spread-scanner.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Document source.
    #[serde(default)]
    pub source: SourceConfig,
    /// Column labels of the option chain tables.
    #[serde(default)]
    pub table: ColumnLabels,
    /// Default constraints.
    #[serde(default)]
    pub constraints: ConstraintsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// With `None`, reads [`DEFAULT_CONFIG_PATH`] if it exists and otherwise
/// returns validated defaults. An explicit path must exist.
pub fn load_config(path: Option<&str>) -> Result<ScannerConfig, ConfigError> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH,
        None => {
            let config = ScannerConfig::default();
            validate_config(&config)?;
            return Ok(config);
        }
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
pub fn load_config_from_string(yaml: &str) -> Result<ScannerConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: ScannerConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &ScannerConfig) -> Result<(), ConfigError> {
    if config.source.file.is_none() && config.source.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "source.url must be set when source.file is absent".to_string(),
        ));
    }

    if config.source.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "source.timeout_secs must be positive".to_string(),
        ));
    }

    let labels = &config.table;
    if [&labels.strike_label, &labels.bid_label, &labels.ask_label]
        .iter()
        .any(|l| l.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "table labels must not be empty".to_string(),
        ));
    }

    config
        .constraints
        .to_constraints()
        .map_err(|e| ConfigError::ValidationError(format!("constraints: {e}")))?;

    let format = config.observability.logging.format.as_str();
    if !LoggingConfig::FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {:?}",
            LoggingConfig::FORMATS
        )));
    }

    Ok(())
}
