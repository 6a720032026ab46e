//! Per-day fasting records and their storage keys

use imsakiyah_store::{KeyValueStore, StoreResult};
use imsakiyah_util::DateKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix shared by every fasting record key
pub const FASTING_KEY_PREFIX: &str = "fasting_";

/// One day of the fasting tracker.
///
/// The JSON shape is `{"date": <label>, "completed": bool, "notes": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FastingDayRecord {
    /// Long-form Indonesian date, e.g. "Senin, 10 Maret 2025"
    #[serde(rename = "date")]
    pub date_label: String,
    pub completed: bool,
    pub notes: String,
}

impl FastingDayRecord {
    /// Fresh record for a day nobody has touched yet
    pub fn new_default(date_label: impl Into<String>) -> Self {
        Self {
            date_label: date_label.into(),
            completed: false,
            notes: String::new(),
        }
    }

    /// Strictly decode a stored value
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Storage key for a day
pub fn record_key(date: DateKey) -> String {
    format!("{}{}", FASTING_KEY_PREFIX, date)
}

/// Storage key used by older data, keyed by the display label
pub fn legacy_record_key(date_label: &str) -> String {
    format!("{}{}", FASTING_KEY_PREFIX, date_label)
}

/// Remove stored records for days before `cutoff`.
///
/// Only date-keyed records are considered; legacy label keys are left alone.
/// Returns the number of records removed.
pub fn prune_records_before(store: &dyn KeyValueStore, cutoff: DateKey) -> StoreResult<usize> {
    let mut removed = 0;
    for key in store.keys_with_prefix(FASTING_KEY_PREFIX)? {
        let Some(date) = key
            .strip_prefix(FASTING_KEY_PREFIX)
            .and_then(DateKey::parse)
        else {
            continue;
        };
        if date < cutoff {
            store.remove(&key)?;
            removed += 1;
        }
    }
    debug!(cutoff = %cutoff, removed, "Pruned fasting records");
    Ok(removed)
}
