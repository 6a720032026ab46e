//! Configuration validation

use crate::schema::RawConfig;
use crate::{MAX_PAGE_SIZE, MAX_TIMEOUT_SECONDS};
use reqwest::Url;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Invalid API base URL '{value}': {message}")]
    InvalidBaseUrl { value: String, message: String },

    #[error("Timeout must be between 1 and {max} seconds, got {value}")]
    InvalidTimeout { value: u64, max: u64 },

    #[error("Page size must be between 1 and {max}, got {value}")]
    InvalidPageSize { value: usize, max: usize },

    #[error("Location requires both province and city")]
    IncompleteLocation,
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(url) = &config.api.base_url
        && let Err(message) = validate_base_url(url)
    {
        errors.push(ValidationError::InvalidBaseUrl {
            value: url.clone(),
            message,
        });
    }

    if let Some(timeout) = config.api.timeout_seconds
        && (timeout == 0 || timeout > MAX_TIMEOUT_SECONDS)
    {
        errors.push(ValidationError::InvalidTimeout {
            value: timeout,
            max: MAX_TIMEOUT_SECONDS,
        });
    }

    if let Some(page_size) = config.tracker.page_size
        && (page_size == 0 || page_size > MAX_PAGE_SIZE)
    {
        errors.push(ValidationError::InvalidPageSize {
            value: page_size,
            max: MAX_PAGE_SIZE,
        });
    }

    if let Some(location) = &config.location
        && (location.province.trim().is_empty() || location.city.trim().is_empty())
    {
        errors.push(ValidationError::IncompleteLocation);
    }

    errors
}

/// Check that a base URL is an absolute http(s) URL
pub fn validate_base_url(url: &str) -> Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| e.to_string())?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", parsed.scheme()));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err("missing host".into());
    }
    // Endpoints are joined with '/'
    if url.ends_with('/') {
        return Err("must not end with '/'".into());
    }

    Ok(())
}
