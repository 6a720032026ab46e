//! Default paths for imsakiyah components
//!
//! Paths are user-writable by default:
//! - Config: `$XDG_CONFIG_HOME/imsakiyah/config.toml` or `~/.config/imsakiyah/config.toml`
//! - Data: `$XDG_DATA_HOME/imsakiyah` or `~/.local/share/imsakiyah`

use std::path::PathBuf;

/// Environment variable for overriding the data directory
pub const IMSAKIYAH_DATA_DIR_ENV: &str = "IMSAKIYAH_DATA_DIR";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Database filename within the data directory
const DB_FILENAME: &str = "imsakiyah.db";

/// Application subdirectory name
const APP_DIR: &str = "imsakiyah";

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$XDG_CONFIG_HOME/imsakiyah/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/imsakiyah/config.toml` (fallback)
///
/// `$IMSAKIYAH_CONFIG` is handled by the CLI argument parser.
pub fn default_config_path() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    PathBuf::from("/tmp").join(APP_DIR).join(CONFIG_FILENAME)
}

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$IMSAKIYAH_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/imsakiyah` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/imsakiyah` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(IMSAKIYAH_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    xdg_data_dir()
}

fn xdg_data_dir() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}

/// Database path inside a data directory
pub fn db_path_in(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(DB_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_contains_app_dir() {
        let path = default_config_path();
        assert!(path.to_string_lossy().contains("imsakiyah"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn data_dir_contains_app_dir() {
        let path = xdg_data_dir();
        assert!(path.to_string_lossy().contains("imsakiyah"));
    }

    #[test]
    fn db_path_is_inside_data_dir() {
        let dir = PathBuf::from("/var/lib/imsakiyah");
        let db = db_path_in(&dir);
        assert_eq!(db.parent().unwrap(), dir);
        assert!(db.to_string_lossy().ends_with(".db"));
    }
}
