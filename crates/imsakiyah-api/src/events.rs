//! User-facing notification events

use chrono::{DateTime, Local};
use imsakiyah_util::LocationKey;
use serde::{Deserialize, Serialize};

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Default,
    Destructive,
}

/// Which remote lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchTarget {
    Provinces,
    Cities,
    Schedule,
}

/// Notification envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Local>,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(payload: EventPayload) -> Self {
        Self {
            timestamp: imsakiyah_util::now(),
            payload,
        }
    }
}

/// Everything the application tells the user about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// A fasting day was marked (not) completed
    FastingToggled { date_label: String, completed: bool },

    /// A schedule was loaded for a location
    ScheduleLoaded { location: LocationKey },

    /// The API had no schedule for the location
    ScheduleNotFound { location: LocationKey },

    /// A remote lookup failed
    FetchFailed { target: FetchTarget },

    /// Search attempted without both province and city
    LocationIncomplete,
}

impl EventPayload {
    pub fn title(&self) -> &'static str {
        match self {
            EventPayload::FastingToggled { completed: true, .. } => "Puasa Selesai",
            EventPayload::FastingToggled { completed: false, .. } => "Puasa Belum Selesai",
            EventPayload::ScheduleLoaded { .. } => "Berhasil",
            EventPayload::ScheduleNotFound { .. } => "Data Tidak Ditemukan",
            EventPayload::FetchFailed { .. } | EventPayload::LocationIncomplete => "Error",
        }
    }

    pub fn description(&self) -> String {
        match self {
            EventPayload::FastingToggled { date_label, .. } => {
                format!("{} telah diperbarui", date_label)
            }
            EventPayload::ScheduleLoaded { location } => format!(
                "Menampilkan jadwal imsakiyah untuk {}, {}",
                location.city, location.province
            ),
            EventPayload::ScheduleNotFound { .. } => {
                "Tidak dapat menemukan jadwal imsakiyah untuk lokasi yang dipilih".to_string()
            }
            EventPayload::FetchFailed { target } => {
                let what = match target {
                    FetchTarget::Provinces => "data provinsi",
                    FetchTarget::Cities => "data kota",
                    FetchTarget::Schedule => "jadwal imsakiyah",
                };
                format!("Gagal mengambil {}. Silakan coba lagi.", what)
            }
            EventPayload::LocationIncomplete => {
                "Silakan pilih provinsi dan kota terlebih dahulu".to_string()
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            EventPayload::FastingToggled { .. } | EventPayload::ScheduleLoaded { .. } => {
                Severity::Default
            }
            _ => Severity::Destructive,
        }
    }
}
