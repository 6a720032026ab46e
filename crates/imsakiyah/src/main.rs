//! imsakiyah - Ramadhan schedules and fasting tracker
//!
//! This is the main entry point for the imsakiyah command line tool.
//! It wires together all the components:
//! - Configuration loading
//! - Store initialization
//! - HTTP schedule source
//! - Fasting ledger
//! - Text rendering

mod app;
mod render;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use imsakiyah_util::{MOCK_TIME_ENV_VAR, default_config_path, is_mock_time_active};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;

/// imsakiyah - Ramadhan prayer schedules and fasting tracker
#[derive(Parser, Debug)]
#[command(name = "imsakiyah")]
#[command(about = "Ramadhan imsakiyah schedules and a fasting tracker", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/imsakiyah/config.toml)
    #[arg(short, long, env = "IMSAKIYAH_CONFIG", default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Data directory override (or set IMSAKIYAH_DATA_DIR env var)
    #[arg(short, long, env = "IMSAKIYAH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List provinces
    Provinces,

    /// List cities and regencies of a province
    Cities {
        province: String,
    },

    /// Look up a city's schedule and remember it as the current location
    Search {
        province: String,
        city: String,
    },

    /// Show the full schedule, or only today's times with --daily
    Schedule {
        #[command(flatten)]
        location: LocationArgs,

        /// Only today's eight times
        #[arg(long)]
        daily: bool,
    },

    /// Today's imsak, maghrib, subuh and isya
    Today {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Fasting tracker
    Tracker {
        #[command(flatten)]
        location: LocationArgs,

        #[command(subcommand)]
        action: TrackerAction,
    },
}

#[derive(Subcommand, Debug)]
enum TrackerAction {
    /// Show one page of the tracker
    Show {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Days per page (default from config)
        #[arg(short = 's', long)]
        page_size: Option<usize>,
    },

    /// Mark a day (not) completed
    Toggle {
        /// Day of the schedule, 1 being today
        day: usize,
    },

    /// Replace the notes of a day
    Note {
        /// Day of the schedule, 1 being today
        day: usize,

        /// New notes; empty clears them
        #[arg(default_value = "")]
        text: String,
    },

    /// Show completion progress
    Progress,

    /// Delete stored records for days before a date (default: today)
    Prune {
        /// Cutoff date, YYYY-MM-DD
        #[arg(long)]
        before: Option<String>,
    },
}

/// Explicit location; falls back to the last search, then the configured default
#[derive(ClapArgs, Debug, Default)]
struct LocationArgs {
    #[arg(long)]
    province: Option<String>,

    #[arg(long)]
    city: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "imsakiyah starting");
    if is_mock_time_active() {
        warn!(env = MOCK_TIME_ENV_VAR, "Mock time is active");
    }

    let app = App::new(&args.config, args.data_dir.as_deref())?;
    app.run(args.command).await
}
