//! Fasting tracker core for imsakiyah
//!
//! This crate contains:
//! - The fasting ledger (Uninitialized -> Initializing -> Ready), which derives
//!   per-day records from a schedule and merges them with persisted state
//! - Progress computation
//! - Pagination and the page-selector window
//! - Saved search preferences

mod events;
mod ledger;
mod pagination;
mod preferences;
mod record;

pub use events::*;
pub use ledger::*;
pub use pagination::*;
pub use preferences::*;
pub use record::*;

use imsakiyah_store::StoreError;
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Ledger is not ready")]
    NotReady,

    #[error("Index {index} out of range for ledger of {len} days")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to persist record for {}: {source}", .record.date_label)]
    PersistenceFailure {
        /// The record as it now stands in memory
        record: Box<FastingDayRecord>,
        #[source]
        source: StoreError,
    },

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Date out of range at day offset {0}")]
    DateOutOfRange(usize),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
