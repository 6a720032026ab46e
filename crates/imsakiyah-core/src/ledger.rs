//! Fasting ledger
//!
//! Derives one record per schedule day, merges it with whatever the store
//! already holds for that date, and writes every mutation straight through.

use chrono::NaiveDate;
use imsakiyah_api::ImsakiyahDay;
use imsakiyah_store::{KeyValueStore, StoreError};
use imsakiyah_util::{DateKey, format_date_long};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    CoreEvent, FastingDayRecord, LedgerError, LedgerResult, legacy_record_key, record_key,
};

/// Lifecycle of a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Uninitialized,
    Initializing,
    Ready,
}

/// Per-entry problem found while initializing. The entry falls back to a
/// default record and initialization carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerWarning {
    /// Stored value could not be decoded into a record
    CorruptRecord {
        index: usize,
        key: String,
        message: String,
    },

    /// Store read or write failed for this entry
    PersistenceFailure {
        index: usize,
        key: String,
        message: String,
    },
}

/// Outcome of building the ledger from a schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Number of schedule days (and records)
    pub days: usize,

    /// Defaults written for previously unseen dates
    pub created: usize,

    /// Records taken from the store as-is
    pub loaded: usize,

    /// Of `loaded`, records found under a legacy label key and rewritten
    pub migrated: usize,

    pub warnings: Vec<LedgerWarning>,
}

impl InitReport {
    /// The schedule had no days; the ledger is empty and nothing was written
    pub fn is_empty_schedule(&self) -> bool {
        self.days == 0
    }
}

/// Share of completed days as a percentage in `[0, 100]`
pub fn compute_progress(records: &[FastingDayRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let completed = records.iter().filter(|r| r.completed).count();
    100.0 * completed as f64 / records.len() as f64
}

/// The fasting tracker's state manager
pub struct FastingLedger {
    store: Arc<dyn KeyValueStore>,
    state: LedgerState,
    dates: Vec<DateKey>,
    records: Vec<FastingDayRecord>,
    events: Vec<CoreEvent>,
}

impl FastingLedger {
    /// Create an empty, uninitialized ledger over a store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: LedgerState::Uninitialized,
            dates: Vec::new(),
            records: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> LedgerState {
        self.state
    }

    /// Records in schedule order
    pub fn records(&self) -> &[FastingDayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Calendar date of the record at `index`
    pub fn date_at(&self, index: usize) -> Option<DateKey> {
        self.dates.get(index).copied()
    }

    pub fn completed_count(&self) -> usize {
        self.records.iter().filter(|r| r.completed).count()
    }

    pub fn progress(&self) -> f64 {
        compute_progress(&self.records)
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build the ledger for `schedule`, where index 0 is `today`.
    ///
    /// Replaces the in-memory list. Stored records win over fresh defaults;
    /// defaults are written only for dates with no stored record.
    pub fn initialize(
        &mut self,
        schedule: &[ImsakiyahDay],
        today: NaiveDate,
    ) -> LedgerResult<InitReport> {
        let previous = self.state;
        self.state = LedgerState::Initializing;

        let mut report = InitReport {
            days: schedule.len(),
            ..Default::default()
        };

        let (dates, records) = match self.derive_all(schedule.len(), today, &mut report) {
            Ok(derived) => derived,
            Err(e) => {
                self.state = previous;
                return Err(e);
            }
        };

        self.dates = dates;
        self.records = records;
        self.state = LedgerState::Ready;

        if report.is_empty_schedule() {
            debug!("Empty schedule, ledger cleared");
        }

        info!(
            days = report.days,
            created = report.created,
            loaded = report.loaded,
            migrated = report.migrated,
            warnings = report.warnings.len(),
            "Fasting ledger initialized"
        );

        self.events.push(CoreEvent::LedgerInitialized {
            days: report.days,
            created: report.created,
            loaded: report.loaded,
        });

        Ok(report)
    }

    /// Rebuild after a new schedule arrives (e.g. a different location).
    ///
    /// Per-date stored state carries over; the previous in-memory list is dropped.
    pub fn on_schedule_changed(
        &mut self,
        schedule: &[ImsakiyahDay],
        today: NaiveDate,
    ) -> LedgerResult<InitReport> {
        info!(days = schedule.len(), "Schedule changed, rebuilding ledger");
        self.initialize(schedule, today)
    }

    /// Flip the completion flag of a day and write it through
    pub fn toggle_completion(&mut self, index: usize) -> LedgerResult<FastingDayRecord> {
        let record = self.record_mut(index)?;
        record.completed = !record.completed;
        let updated = record.clone();

        self.events.push(CoreEvent::FastingToggled {
            index,
            date: self.dates[index],
            date_label: updated.date_label.clone(),
            completed: updated.completed,
        });

        self.persist_day(index)?;

        debug!(index, completed = updated.completed, "Fasting day toggled");
        Ok(updated)
    }

    /// Replace the notes of a day and write it through
    pub fn update_notes(&mut self, index: usize, notes: impl Into<String>) -> LedgerResult<()> {
        let record = self.record_mut(index)?;
        record.notes = notes.into();

        self.persist_day(index)?;

        debug!(index, "Fasting notes updated");
        Ok(())
    }

    /// Write the in-memory record at `index` to the store.
    ///
    /// Mutations call this themselves; callers use it to retry after a
    /// `PersistenceFailure`.
    pub fn persist_day(&self, index: usize) -> LedgerResult<()> {
        self.ensure_ready()?;
        let (date, record) = self.entry(index)?;

        write_record(self.store.as_ref(), &record_key(date), record).map_err(|source| {
            warn!(index, date = %date, error = %source, "Failed to persist fasting record");
            LedgerError::PersistenceFailure {
                record: Box::new(record.clone()),
                source,
            }
        })
    }

    fn ensure_ready(&self) -> LedgerResult<()> {
        if self.state == LedgerState::Ready {
            Ok(())
        } else {
            Err(LedgerError::NotReady)
        }
    }

    fn entry(&self, index: usize) -> LedgerResult<(DateKey, &FastingDayRecord)> {
        match (self.dates.get(index), self.records.get(index)) {
            (Some(date), Some(record)) => Ok((*date, record)),
            _ => Err(LedgerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    fn record_mut(&mut self, index: usize) -> LedgerResult<&mut FastingDayRecord> {
        self.ensure_ready()?;
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })
    }

    fn derive_all(
        &self,
        days: usize,
        today: NaiveDate,
        report: &mut InitReport,
    ) -> LedgerResult<(Vec<DateKey>, Vec<FastingDayRecord>)> {
        let start = DateKey::new(today);
        let mut dates = Vec::with_capacity(days);
        let mut records = Vec::with_capacity(days);

        for index in 0..days {
            let date = start
                .offset_days(index as u64)
                .ok_or(LedgerError::DateOutOfRange(index))?;
            let label = format_date_long(date.date());
            records.push(self.derive_record(index, date, &label, report));
            dates.push(date);
        }

        Ok((dates, records))
    }

    /// Resolve one day: stored record, then legacy label record, then a new default.
    fn derive_record(
        &self,
        index: usize,
        date: DateKey,
        label: &str,
        report: &mut InitReport,
    ) -> FastingDayRecord {
        let key = record_key(date);
        match self.lookup(index, &key, report) {
            Lookup::Found(record) => {
                report.loaded += 1;
                return record;
            }
            Lookup::Unusable => return FastingDayRecord::new_default(label),
            Lookup::Missing => {}
        }

        let legacy_key = legacy_record_key(label);
        match self.lookup(index, &legacy_key, report) {
            Lookup::Found(record) => {
                report.loaded += 1;
                self.migrate(index, &key, &legacy_key, &record, report);
                return record;
            }
            Lookup::Unusable => return FastingDayRecord::new_default(label),
            Lookup::Missing => {}
        }

        let record = FastingDayRecord::new_default(label);
        match write_record(self.store.as_ref(), &key, &record) {
            Ok(()) => report.created += 1,
            Err(e) => {
                warn!(index, key = %key, error = %e, "Failed to store default fasting record");
                report.warnings.push(LedgerWarning::PersistenceFailure {
                    index,
                    key,
                    message: e.to_string(),
                });
            }
        }
        record
    }

    fn lookup(&self, index: usize, key: &str, report: &mut InitReport) -> Lookup {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Lookup::Missing,
            Err(e) => {
                warn!(index, key = %key, error = %e, "Failed to read fasting record");
                report.warnings.push(LedgerWarning::PersistenceFailure {
                    index,
                    key: key.to_string(),
                    message: e.to_string(),
                });
                return Lookup::Unusable;
            }
        };

        match FastingDayRecord::decode(&raw) {
            Ok(record) => Lookup::Found(record),
            Err(e) => {
                // Left in place; only an explicit edit of this day replaces it
                warn!(index, key = %key, error = %e, "Corrupt fasting record");
                report.warnings.push(LedgerWarning::CorruptRecord {
                    index,
                    key: key.to_string(),
                    message: e.to_string(),
                });
                Lookup::Unusable
            }
        }
    }

    fn migrate(
        &self,
        index: usize,
        key: &str,
        legacy_key: &str,
        record: &FastingDayRecord,
        report: &mut InitReport,
    ) {
        let result = write_record(self.store.as_ref(), key, record)
            .and_then(|()| self.store.remove(legacy_key));

        match result {
            Ok(()) => {
                debug!(index, from = %legacy_key, to = %key, "Migrated legacy fasting record");
                report.migrated += 1;
            }
            Err(e) => {
                warn!(index, key = %key, error = %e, "Failed to migrate legacy fasting record");
                report.warnings.push(LedgerWarning::PersistenceFailure {
                    index,
                    key: key.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
}

enum Lookup {
    Found(FastingDayRecord),
    Missing,
    /// Present but unreadable or undecodable; already reported
    Unusable,
}

fn write_record(
    store: &dyn KeyValueStore,
    key: &str,
    record: &FastingDayRecord,
) -> Result<(), StoreError> {
    let json = record.encode()?;
    store.set(key, &json)
}
