//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Remote schedule API settings
    #[serde(default)]
    pub api: RawApiConfig,

    /// Local persistence settings
    #[serde(default)]
    pub storage: RawStorageConfig,

    /// Fasting tracker settings
    #[serde(default)]
    pub tracker: RawTrackerConfig,

    /// Location used when no search has been made yet
    #[serde(default)]
    pub location: Option<RawLocation>,
}

/// Schedule API settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawApiConfig {
    /// Base URL (default: https://equran.id/api/v2/imsakiyah)
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// Storage settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStorageConfig {
    /// Data directory for the database
    pub data_dir: Option<PathBuf>,
}

/// Tracker settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawTrackerConfig {
    /// Days shown per page
    pub page_size: Option<usize>,
}

/// Province and city pair
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawLocation {
    pub province: String,
    pub city: String,
}
