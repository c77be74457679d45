//! Group ledger
//!
//! Owns one group's expense history and ties the engine components
//! together over it: split-validated writes in, freshly derived balances
//! and settlement plans out, with a [`LedgerEvent`] emitted for every
//! mutation so the activity collaborator can observe.
//!
//! # Critical Invariants
//!
//! 1. Every stored expense passed split validation; rejected writes
//!    mutate nothing (no expense, no event)
//! 2. Edits swap the whole split set atomically — a failed edit leaves
//!    the stored expense untouched
//! 3. Balances and settlements are derived on demand from the full
//!    history, never cached or persisted
//!
//! Each ledger is an independent owned value; invocations for different
//! groups need no coordination. Feeding one ledger a consistent snapshot
//! of its group's history is the storage collaborator's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::balance::{compute_balances, BalanceSheet};
use crate::models::event::{EventLog, LedgerEvent};
use crate::models::expense::Expense;
use crate::models::settlement::Settlement;
use crate::settlement::{compute_settlements, MatchOrder};
use crate::split::{SplitError, SplitSpec};

/// Errors that can occur on the ledger surface
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Unknown expense: {expense_id}")]
    UnknownExpense { expense_id: String },

    #[error("Split validation failed: {0}")]
    Split(#[from] SplitError),
}

/// One group's expense history plus its event log.
///
/// # Example
/// ```
/// use split_ledger_core_rs::{GroupLedger, MatchOrder, SplitSpec};
///
/// let mut ledger = GroupLedger::new("trip".to_string());
/// let members = vec!["alice".to_string(), "bob".to_string()];
///
/// ledger
///     .add_expense("Groceries".to_string(), 90.0, "alice".to_string(), &members, &SplitSpec::Equal)
///     .unwrap();
/// ledger
///     .add_expense("Fuel".to_string(), 30.0, "bob".to_string(), &members, &SplitSpec::Equal)
///     .unwrap();
///
/// let balances = ledger.balances();
/// assert_eq!(balances.get("alice"), 30.0);
/// assert_eq!(balances.get("bob"), -30.0);
///
/// let plan = ledger.settlements(MatchOrder::default());
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan[0].from, "bob");
/// assert_eq!(plan[0].to, "alice");
/// assert_eq!(plan[0].amount, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLedger {
    /// Opaque group identifier
    group_id: String,

    /// Expense history in recording order
    expenses: Vec<Expense>,

    /// Mutation events, in emission order
    events: EventLog,

    /// Next event sequence number
    next_seq: u64,
}

impl GroupLedger {
    /// Create an empty ledger for a group
    pub fn new(group_id: String) -> Self {
        Self {
            group_id,
            expenses: Vec::new(),
            events: EventLog::new(),
            next_seq: 0,
        }
    }

    /// Get the group identifier
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Record a new expense.
    ///
    /// Splits are computed and validated first; a rejected expense leaves
    /// the ledger untouched (no record, no event).
    ///
    /// # Returns
    ///
    /// A reference to the stored expense, or the validation error.
    pub fn add_expense(
        &mut self,
        description: String,
        total_amount: f64,
        payer: String,
        participants: &[String],
        spec: &SplitSpec,
    ) -> Result<&Expense, LedgerError> {
        let expense = Expense::new(description, total_amount, payer, participants, spec)?;

        let seq = self.bump_seq();
        self.events.log(LedgerEvent::ExpenseAdded {
            seq,
            expense_id: expense.id().to_string(),
            description: expense.description().to_string(),
            amount: expense.total_amount(),
            payer: expense.payer().to_string(),
        });

        self.expenses.push(expense);
        Ok(self.expenses.last().unwrap()) // just pushed
    }

    /// Edit an existing expense, replacing its split set atomically.
    ///
    /// The payer cannot be changed; only description, amount, and splits.
    /// Validation failure leaves the stored expense, the history, and the
    /// event log exactly as they were.
    pub fn update_expense(
        &mut self,
        expense_id: &str,
        description: String,
        total_amount: f64,
        participants: &[String],
        spec: &SplitSpec,
    ) -> Result<(), LedgerError> {
        let index = self
            .index_of(expense_id)
            .ok_or_else(|| LedgerError::UnknownExpense {
                expense_id: expense_id.to_string(),
            })?;

        self.expenses[index].replace_splits(description, total_amount, participants, spec)?;

        let (description, amount) = {
            let expense = &self.expenses[index];
            (expense.description().to_string(), expense.total_amount())
        };
        let seq = self.bump_seq();
        self.events.log(LedgerEvent::ExpenseEdited {
            seq,
            expense_id: expense_id.to_string(),
            description,
            amount,
        });

        Ok(())
    }

    /// Delete an expense from the history.
    ///
    /// # Returns
    ///
    /// The removed expense, or [`LedgerError::UnknownExpense`].
    pub fn remove_expense(&mut self, expense_id: &str) -> Result<Expense, LedgerError> {
        let index = self
            .index_of(expense_id)
            .ok_or_else(|| LedgerError::UnknownExpense {
                expense_id: expense_id.to_string(),
            })?;

        let expense = self.expenses.remove(index);

        let seq = self.bump_seq();
        self.events.log(LedgerEvent::ExpenseRemoved {
            seq,
            expense_id: expense.id().to_string(),
            description: expense.description().to_string(),
        });

        Ok(expense)
    }

    /// Look up an expense by ID
    pub fn expense(&self, expense_id: &str) -> Option<&Expense> {
        self.index_of(expense_id).map(|i| &self.expenses[i])
    }

    /// The expense history, in recording order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn num_expenses(&self) -> usize {
        self.expenses.len()
    }

    /// Net balances derived from the current history.
    ///
    /// Recomputed fresh on every call; never cached.
    pub fn balances(&self) -> BalanceSheet {
        compute_balances(&self.expenses)
    }

    /// Settlement plan for the current balances.
    ///
    /// Ephemeral: stale as soon as the history changes.
    pub fn settlements(&self, order: MatchOrder) -> Vec<Settlement> {
        compute_settlements(&self.balances(), order)
    }

    /// Mutation events, in emission order
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    fn index_of(&self, expense_id: &str) -> Option<usize> {
        self.expenses.iter().position(|e| e.id() == expense_id)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
