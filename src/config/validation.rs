//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Target URL must parse, use http/https and name a host
//! - Timeouts must be non-zero
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProbeConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ProbeConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target.url must not be empty")]
    EmptyUrl,

    #[error("target.url '{url}' is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("target.url scheme '{0}' is not supported (expected https or http)")]
    UnsupportedScheme(String),

    #[error("target.url '{0}' has no host")]
    MissingHost(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("client.user_agent must not be empty")]
    EmptyUserAgent,
}

pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_target(&config.target.url, &mut errors);

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.client.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_target(raw: &str, errors: &mut Vec<ValidationError>) {
    if raw.trim().is_empty() {
        errors.push(ValidationError::EmptyUrl);
        return;
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            errors.push(ValidationError::InvalidUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            });
            return;
        }
    };

    match url.scheme() {
        "https" | "http" => {}
        other => errors.push(ValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().map_or(true, str::is_empty) {
        errors.push(ValidationError::MissingHost(raw.to_string()));
    }
}
