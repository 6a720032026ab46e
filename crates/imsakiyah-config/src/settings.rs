//! Validated settings

use crate::schema::{RawApiConfig, RawConfig, RawLocation};
use imsakiyah_util::{LocationKey, default_data_dir};
use std::path::PathBuf;
use std::time::Duration;

/// Days per tracker page when not configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest accepted tracker page size
pub const MAX_PAGE_SIZE: usize = 100;

/// Request timeout when not configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Largest accepted request timeout
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Validated settings ready for use by the application
#[derive(Debug, Clone)]
pub struct Settings {
    /// Schedule API settings
    pub api: ApiSettings,

    /// Directory holding the database
    pub data_dir: PathBuf,

    /// Days shown per tracker page
    pub page_size: usize,

    /// Location used before any search has been saved
    pub default_location: Option<LocationKey>,
}

impl Settings {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        Self {
            api: ApiSettings::from_raw(raw.api),
            data_dir: raw.storage.data_dir.unwrap_or_else(default_data_dir),
            page_size: raw.tracker.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            default_location: raw.location.map(convert_location),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            data_dir: default_data_dir(),
            page_size: DEFAULT_PAGE_SIZE,
            default_location: None,
        }
    }
}

/// Schedule API settings
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiSettings {
    fn from_raw(raw: RawApiConfig) -> Self {
        Self {
            base_url: raw
                .base_url
                .unwrap_or_else(|| imsakiyah_api::DEFAULT_API_BASE_URL.to_string()),
            timeout: Duration::from_secs(raw.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::from_raw(RawApiConfig::default())
    }
}

fn convert_location(raw: RawLocation) -> LocationKey {
    LocationKey::new(raw.province.trim(), raw.city.trim())
}
