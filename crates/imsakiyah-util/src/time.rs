//! Time utilities for imsakiyah
//!
//! Provides the wall clock used to decide what "today" is, plus the
//! Indonesian (`id-ID`) date labels shown to users and stored in fasting
//! records.
//!
//! # Mock Time for Development
//!
//! In debug builds, the `IMSAKIYAH_MOCK_TIME` environment variable can be set
//! to override the system time. This is useful for checking tracker behaviour
//! on a specific day of Ramadhan.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-03-10 04:30:00`)
//!
//! Example:
//! ```bash
//! IMSAKIYAH_MOCK_TIME="2025-03-10 04:30:00" imsakiyah tracker show
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};
#[cfg(debug_assertions)]
use chrono::{NaiveDateTime, TimeZone};
use std::sync::OnceLock;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "IMSAKIYAH_MOCK_TIME";

/// Offset between the Gregorian and Hijri year used for display
const HIJRI_YEAR_OFFSET: i32 = 579;

/// Cached mock time offset from the real time when the process started.
/// This allows mock time to advance naturally.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

#[allow(clippy::disallowed_methods)] // This is the internal implementation that wraps Local::now()
fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                if let Ok(naive_dt) =
                    NaiveDateTime::parse_from_str(&mock_time_str, "%Y-%m-%d %H:%M:%S")
                {
                    if let Some(mock_dt) = Local.from_local_datetime(&naive_dt).single() {
                        let offset = mock_dt.signed_duration_since(chrono::Local::now());
                        tracing::info!(
                            mock_time = %mock_time_str,
                            offset_secs = offset.num_seconds(),
                            "Mock time enabled"
                        );
                        return Some(offset);
                    }
                    tracing::warn!(
                        mock_time = %mock_time_str,
                        "Failed to convert mock time to local timezone"
                    );
                } else {
                    tracing::warn!(
                        mock_time = %mock_time_str,
                        expected_format = "%Y-%m-%d %H:%M:%S",
                        "Invalid mock time format"
                    );
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
#[allow(clippy::disallowed_methods)] // This is the wrapper that provides mock time support
pub fn now() -> DateTime<Local> {
    let real_now = chrono::Local::now();

    match get_mock_time_offset() {
        Some(offset) => real_now + offset,
        None => real_now,
    }
}

/// The current local calendar day
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Indonesian weekday name
pub fn weekday_name_id(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Indonesian month name for a 1-based month number
pub fn month_name_id(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ];
    MONTHS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Long-form date label, e.g. `Senin, 10 Maret 2025`
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{}, {}",
        weekday_name_id(date.weekday()),
        format_date_medium(date)
    )
}

/// Date label without the weekday, e.g. `10 Maret 2025`
pub fn format_date_medium(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name_id(date.month()),
        date.year()
    )
}

/// Format a DateTime as a 24-hour clock with seconds.
pub fn format_clock_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Rough Hijri year for headings when the schedule does not carry one.
pub fn approximate_hijri_year(date: NaiveDate) -> i32 {
    date.year() - HIJRI_YEAR_OFFSET
}
