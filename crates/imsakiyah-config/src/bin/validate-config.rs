//! Checks an imsakiyah config file and prints the settings it resolves to.

use imsakiyah_config::{CURRENT_CONFIG_VERSION, ConfigError, Settings, load_config};
use imsakiyah_util::default_config_path;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    if !path.is_file() {
        eprintln!("No config file at {}", path.display());
        eprintln!("Usage: validate-config [config-file]");
        return ExitCode::from(2);
    }

    match load_config(&path) {
        Ok(settings) => {
            println!("{}: OK", path.display());
            print_settings(&settings);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: invalid", path.display());
            report(&e);
            ExitCode::from(1)
        }
    }
}

fn print_settings(settings: &Settings) {
    let location = settings
        .default_location
        .as_ref()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("  config_version  {}", CURRENT_CONFIG_VERSION);
    println!("  api.base_url    {}", settings.api.base_url);
    println!("  api.timeout     {}s", settings.api.timeout.as_secs());
    println!("  storage         {}", settings.data_dir.display());
    println!("  page_size       {}", settings.page_size);
    println!("  location        {}", location);
}

fn report(error: &ConfigError) {
    match error {
        ConfigError::ValidationFailed { errors } => {
            for err in errors {
                eprintln!("  - {}", err);
            }
        }
        ConfigError::UnsupportedVersion(found) => {
            eprintln!("  config_version {} is not supported (expected {})", found, CURRENT_CONFIG_VERSION);
        }
        other => eprintln!("  {}", other),
    }
}
