//! Ledger events for the activity-observing collaborator.
//!
//! This module defines the event records a [`GroupLedger`] emits on every
//! mutation of its expense history. Events enable:
//! - Activity feeds ("alice added Dinner, 300.00")
//! - Debugging (understand what changed and in what order)
//! - Auditing (every balance change traces back to an event)
//!
//! The engine only *emits* events into an in-memory log; storing them,
//! notifying users, or rendering a trail is the collaborator's concern.
//!
//! [`GroupLedger`]: crate::ledger::GroupLedger

use serde::{Deserialize, Serialize};

/// A record of one ledger mutation.
///
/// All events carry a per-ledger monotonic sequence number (`seq`) for
/// ordering; the collaborator can attach wall-clock time on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A new expense was recorded
    ExpenseAdded {
        seq: u64,
        expense_id: String,
        description: String,
        amount: f64,
        payer: String,
    },

    /// An existing expense was edited (split set replaced atomically)
    ExpenseEdited {
        seq: u64,
        expense_id: String,
        description: String,
        amount: f64,
    },

    /// An expense was deleted from the history
    ExpenseRemoved {
        seq: u64,
        expense_id: String,
        description: String,
    },
}

impl LedgerEvent {
    /// Get the sequence number of this event
    pub fn seq(&self) -> u64 {
        match self {
            LedgerEvent::ExpenseAdded { seq, .. } => *seq,
            LedgerEvent::ExpenseEdited { seq, .. } => *seq,
            LedgerEvent::ExpenseRemoved { seq, .. } => *seq,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::ExpenseAdded { .. } => "expense_added",
            LedgerEvent::ExpenseEdited { .. } => "expense_edited",
            LedgerEvent::ExpenseRemoved { .. } => "expense_removed",
        }
    }

    /// Get the ID of the expense this event relates to
    pub fn expense_id(&self) -> &str {
        match self {
            LedgerEvent::ExpenseAdded { expense_id, .. } => expense_id,
            LedgerEvent::ExpenseEdited { expense_id, .. } => expense_id,
            LedgerEvent::ExpenseRemoved { expense_id, .. } => expense_id,
        }
    }
}

/// Event log for storing and querying ledger events.
///
/// A simple wrapper around `Vec<LedgerEvent>` with convenience queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events, in emission order
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&LedgerEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific expense
    pub fn events_for_expense(&self, expense_id: &str) -> Vec<&LedgerEvent> {
        self.events
            .iter()
            .filter(|e| e.expense_id() == expense_id)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
