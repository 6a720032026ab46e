//! Core events emitted by the ledger

use imsakiyah_api::EventPayload;
use imsakiyah_util::DateKey;

/// Events emitted by the fasting ledger
#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    /// Ledger (re)built from a schedule
    LedgerInitialized {
        days: usize,
        created: usize,
        loaded: usize,
    },

    /// A day's completion flag was flipped
    FastingToggled {
        index: usize,
        date: DateKey,
        date_label: String,
        completed: bool,
    },
}

impl CoreEvent {
    /// User-facing notification for this event, if it warrants one
    pub fn notification(&self) -> Option<EventPayload> {
        match self {
            CoreEvent::FastingToggled {
                date_label,
                completed,
                ..
            } => Some(EventPayload::FastingToggled {
                date_label: date_label.clone(),
                completed: *completed,
            }),
            CoreEvent::LedgerInitialized { .. } => None,
        }
    }
}
