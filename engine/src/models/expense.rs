//! Expense model
//!
//! Represents one shared expense recorded against a group.
//! Each expense has:
//! - A payer (the participant who fronted the money)
//! - A total amount (f64, single implied currency unit)
//! - An ordered list of per-participant splits
//! - The strategy that produced those splits
//!
//! # Critical Invariants
//!
//! 1. `splits` always sums to `total_amount` within the strategy's
//!    tolerance — enforced at construction, never re-checked downstream
//! 2. Edits replace the whole split set atomically: a failed edit leaves
//!    the expense exactly as it was
//! 3. The payer is fixed at creation; edits may change description,
//!    amount, and splits only

use serde::{Deserialize, Serialize};

use crate::split::{compute_splits, SplitError, SplitSpec};

/// The rule used to divide an expense among its participants.
///
/// Serialized as `"equal"` / `"percentage"` / `"unequal"`, the values the
/// UI collaborator round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Every participant owes `total / n`
    Equal,

    /// Each participant owes `total * percentage / 100`
    Percentage,

    /// Each participant owes a caller-supplied absolute amount
    Unequal,
}

impl SplitStrategy {
    /// Short name of the strategy, matching its wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitStrategy::Equal => "equal",
            SplitStrategy::Percentage => "percentage",
            SplitStrategy::Unequal => "unequal",
        }
    }
}

/// One participant's share of an expense.
///
/// `owed_amount` is always a concrete currency amount regardless of
/// strategy. `percentage` is retained only for percentage splits, purely
/// so the UI can re-populate the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Opaque participant identifier
    pub participant: String,

    /// Concrete amount this participant owes toward the expense
    pub owed_amount: f64,

    /// Strategy that produced this split
    pub strategy: SplitStrategy,

    /// Original percentage input (percentage strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// A shared expense recorded against a group.
///
/// Constructed through [`Expense::new`], which runs the split calculator
/// and rejects the expense outright if any validation invariant fails —
/// an `Expense` value always carries a consistent split set.
///
/// # Example
/// ```
/// use split_ledger_core_rs::{Expense, SplitSpec};
///
/// let members = vec!["alice".to_string(), "bob".to_string(), "carol".to_string()];
/// let expense = Expense::new(
///     "Dinner".to_string(),
///     300.0,
///     "alice".to_string(),
///     &members,
///     &SplitSpec::Equal,
/// ).unwrap();
///
/// assert_eq!(expense.splits().len(), 3);
/// assert_eq!(expense.splits()[1].owed_amount, 100.0);
/// assert!(!expense.is_edited());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier (UUID)
    id: String,

    /// Human-readable description (e.g., "Dinner")
    description: String,

    /// Total expense amount
    total_amount: f64,

    /// Participant who paid the bill
    payer: String,

    /// Per-participant shares, in the participant order given at creation
    splits: Vec<Split>,

    /// Strategy used to compute the current split set
    strategy: SplitStrategy,

    /// Whether the expense has been edited since creation
    edited: bool,
}

impl Expense {
    /// Create a new expense, computing and validating its splits.
    ///
    /// # Arguments
    /// * `description` - Human-readable label
    /// * `total_amount` - Total amount paid (must be positive)
    /// * `payer` - Participant who paid
    /// * `participants` - Participants sharing the expense, in order
    /// * `spec` - Split strategy plus its per-participant inputs
    ///
    /// # Errors
    ///
    /// Returns the specific [`SplitError`] when a validation invariant
    /// fails; no expense is created in that case.
    pub fn new(
        description: String,
        total_amount: f64,
        payer: String,
        participants: &[String],
        spec: &SplitSpec,
    ) -> Result<Self, SplitError> {
        let splits = compute_splits(total_amount, participants, spec)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            total_amount,
            payer,
            splits,
            strategy: spec.strategy(),
            edited: false,
        })
    }

    /// Get the expense ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the total amount
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Get the payer's participant ID
    pub fn payer(&self) -> &str {
        &self.payer
    }

    /// Get the per-participant splits
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Get the strategy used for the current split set
    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// Whether the expense has been edited since creation
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Replace the expense's description, amount, and split set atomically.
    ///
    /// The new split set is computed and validated first; only on success
    /// is any field touched. A failed edit leaves the expense exactly as
    /// it was, so callers can surface the error and re-prompt.
    ///
    /// # Errors
    ///
    /// Returns the failing [`SplitError`]; the expense is unchanged.
    pub fn replace_splits(
        &mut self,
        description: String,
        total_amount: f64,
        participants: &[String],
        spec: &SplitSpec,
    ) -> Result<(), SplitError> {
        let splits = compute_splits(total_amount, participants, spec)?;

        self.description = description;
        self.total_amount = total_amount;
        self.splits = splits;
        self.strategy = spec.strategy();
        self.edited = true;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_new_expense_has_unique_id() {
        let group = members(&["a", "b"]);
        let e1 = Expense::new("Taxi".to_string(), 40.0, "a".to_string(), &group, &SplitSpec::Equal)
            .unwrap();
        let e2 = Expense::new("Taxi".to_string(), 40.0, "a".to_string(), &group, &SplitSpec::Equal)
            .unwrap();

        assert_ne!(e1.id(), e2.id());
    }

    #[test]
    fn test_failed_edit_leaves_expense_unchanged() {
        let group = members(&["a", "b"]);
        let mut expense =
            Expense::new("Taxi".to_string(), 40.0, "a".to_string(), &group, &SplitSpec::Equal)
                .unwrap();
        let before = expense.clone();

        // Non-positive total must be rejected without touching anything
        let result = expense.replace_splits("Taxi".to_string(), -1.0, &group, &SplitSpec::Equal);

        assert!(result.is_err());
        assert_eq!(expense, before);
        assert!(!expense.is_edited());
    }

    #[test]
    fn test_successful_edit_marks_expense_edited() {
        let group = members(&["a", "b"]);
        let mut expense =
            Expense::new("Taxi".to_string(), 40.0, "a".to_string(), &group, &SplitSpec::Equal)
                .unwrap();

        expense
            .replace_splits("Taxi + tip".to_string(), 50.0, &group, &SplitSpec::Equal)
            .unwrap();

        assert_eq!(expense.description(), "Taxi + tip");
        assert_eq!(expense.total_amount(), 50.0);
        assert_eq!(expense.splits()[0].owed_amount, 25.0);
        assert!(expense.is_edited());
    }
}
