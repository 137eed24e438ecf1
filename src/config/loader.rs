//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProbeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the probe target.
pub const TARGET_URL_ENV: &str = "NET_TEST_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Overrides given on the command line; they beat every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub request_secs: Option<u64>,
}

/// Read a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<ProbeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProbeConfig, ConfigError> {
    let config = read_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// An unset or empty `NET_TEST_URL` leaves the configured target alone.
pub fn apply_env_overrides<F>(mut config: ProbeConfig, lookup: F) -> ProbeConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(TARGET_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!(url = %url, "Target overridden by {}", TARGET_URL_ENV);
        config.target.url = url;
    }
    config
}

/// Apply command-line overrides.
pub fn apply_overrides(mut config: ProbeConfig, overrides: &Overrides) -> ProbeConfig {
    if let Some(url) = &overrides.url {
        config.target.url = url.clone();
    }
    if let Some(secs) = overrides.request_secs {
        config.timeouts.request_secs = secs;
    }
    config
}

/// Resolve the effective configuration.
///
/// Sources are layered default < file < environment < overrides, and only
/// the merged result is validated, so a bad value in a lower layer is fine
/// as long as a higher one replaces it.
pub fn resolve<F>(
    path: Option<&Path>,
    lookup: F,
    overrides: &Overrides,
) -> Result<ProbeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match path {
        Some(path) => read_config(path)?,
        None => ProbeConfig::default(),
    };

    let config = apply_overrides(apply_env_overrides(base, lookup), overrides);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
