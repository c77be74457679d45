//! Balance Aggregator
//!
//! Folds a group's ordered expense history into a single net-balance
//! mapping: participant → signed amount. Positive means the participant
//! is owed money, negative means they owe, zero means settled.
//!
//! # Critical Invariants
//!
//! 1. **Zero-sum**: for any internally consistent expense set the
//!    balances sum to 0 (within floating tolerance) — every unit credited
//!    to a payer is matched by units debited from splits totalling the
//!    expense amount
//! 2. **Order independence**: the folded amounts are the same for any
//!    permutation of the expense set (addition commutes); only the
//!    first-appearance ordering of participants follows history order
//! 3. **Total function**: no validation, no errors. Expenses are trusted
//!    to have been validated at creation; feeding the fold a malformed
//!    expense (splits not summing to its total) is out of contract and
//!    its effect on the zero-sum property is unspecified — deliberately
//!    not checked here to keep the hot path allocation-light
//!
//! Balances are derived values: recomputed from the full history each
//! time they are needed, never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::expense::Expense;
use crate::models::settlement::Settlement;

/// Net balance drift tolerated by the zero-sum invariant checks in tests.
pub const ZERO_SUM_TOLERANCE: f64 = 1e-6;

/// Net-balance mapping for one group.
///
/// Preserves insertion order of first appearance across the expense
/// history — the settlement resolver matches debtors to creditors in
/// exactly this order, so it is part of the observable contract.
///
/// Absent participants read as 0.
///
/// # Example
/// ```
/// use split_ledger_core_rs::BalanceSheet;
///
/// let mut sheet = BalanceSheet::new();
/// sheet.add("alice", 300.0);
/// sheet.add("bob", -100.0);
/// sheet.add("alice", -100.0);
///
/// assert_eq!(sheet.get("alice"), 200.0);
/// assert_eq!(sheet.get("bob"), -100.0);
/// assert_eq!(sheet.get("carol"), 0.0); // absent = 0
/// assert_eq!(sheet.participants(), ["alice", "bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Participant IDs in first-appearance order
    order: Vec<String>,

    /// Net amount per participant
    amounts: HashMap<String, f64>,
}

impl BalanceSheet {
    /// Create a new empty balance sheet
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            amounts: HashMap::new(),
        }
    }

    /// Add a signed delta to a participant's balance.
    ///
    /// A participant seen for the first time enters the iteration order
    /// here, starting from an implicit 0.
    pub fn add(&mut self, participant: &str, delta: f64) {
        match self.amounts.get_mut(participant) {
            Some(balance) => *balance += delta,
            None => {
                self.order.push(participant.to_string());
                self.amounts.insert(participant.to_string(), delta);
            }
        }
    }

    /// Get a participant's net balance (0 if never seen)
    pub fn get(&self, participant: &str) -> f64 {
        self.amounts.get(participant).copied().unwrap_or(0.0)
    }

    /// Participant IDs in first-appearance order
    pub fn participants(&self) -> &[String] {
        &self.order
    }

    /// Iterate `(participant, balance)` pairs in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(move |p| (p.as_str(), self.amounts[p]))
    }

    /// Number of participants with an entry (including zero entries)
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the sheet has no entries
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all balances (0 within tolerance for consistent input)
    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    /// Replay a settlement against the sheet: the debtor paying moves
    /// their balance up by `amount` and the creditor's down by `amount`.
    ///
    /// Applying a full settlement plan produced from this sheet drives
    /// every balance to zero.
    pub fn apply(&mut self, settlement: &Settlement) {
        self.add(&settlement.from, settlement.amount);
        self.add(&settlement.to, -settlement.amount);
    }
}

/// Fold an ordered expense collection into a fresh balance sheet.
///
/// For each expense: credit the payer the full amount, debit each split
/// participant their owed share. A payer who also splits the bill nets
/// to "owed the rest of the group's shares".
///
/// # Example
/// ```
/// use split_ledger_core_rs::{compute_balances, Expense, SplitSpec};
///
/// let members = vec!["alice".to_string(), "bob".to_string(), "carol".to_string()];
/// let dinner = Expense::new(
///     "Dinner".to_string(),
///     300.0,
///     "alice".to_string(),
///     &members,
///     &SplitSpec::Equal,
/// ).unwrap();
///
/// let balances = compute_balances(&[dinner]);
/// assert_eq!(balances.get("alice"), 200.0);
/// assert_eq!(balances.get("bob"), -100.0);
/// assert_eq!(balances.get("carol"), -100.0);
/// assert!(balances.total().abs() < 1e-6);
/// ```
pub fn compute_balances(expenses: &[Expense]) -> BalanceSheet {
    let mut sheet = BalanceSheet::new();

    for expense in expenses {
        sheet.add(expense.payer(), expense.total_amount());
        for split in expense.splits() {
            sheet.add(&split.participant, -split.owed_amount);
        }
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::SplitSpec;

    fn members(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn equal_expense(total: f64, payer: &str, group: &[String]) -> Expense {
        Expense::new("test".to_string(), total, payer.to_string(), group, &SplitSpec::Equal)
            .unwrap()
    }

    #[test]
    fn test_payer_outside_split_set() {
        // alice pays but only bob and carol split the bill
        let group = members(&["bob", "carol"]);
        let expense = equal_expense(80.0, "alice", &group);

        let sheet = compute_balances(&[expense]);

        assert_eq!(sheet.get("alice"), 80.0);
        assert_eq!(sheet.get("bob"), -40.0);
        assert_eq!(sheet.get("carol"), -40.0);
        assert_eq!(sheet.participants(), ["alice", "bob", "carol"]);
    }

    #[test]
    fn test_fold_is_order_independent() {
        let group = members(&["a", "b"]);
        let e1 = equal_expense(90.0, "a", &group);
        let e2 = equal_expense(30.0, "b", &group);

        let forward = compute_balances(&[e1.clone(), e2.clone()]);
        let backward = compute_balances(&[e2, e1]);

        for p in ["a", "b"] {
            assert_eq!(forward.get(p), backward.get(p));
        }
    }

    #[test]
    fn test_empty_history_gives_empty_sheet() {
        let sheet = compute_balances(&[]);

        assert!(sheet.is_empty());
        assert_eq!(sheet.total(), 0.0);
    }

    #[test]
    fn test_apply_settlement_moves_both_sides() {
        let mut sheet = BalanceSheet::new();
        sheet.add("a", 60.0);
        sheet.add("b", -60.0);

        sheet.apply(&Settlement {
            from: "b".to_string(),
            to: "a".to_string(),
            amount: 60.0,
        });

        assert_eq!(sheet.get("a"), 0.0);
        assert_eq!(sheet.get("b"), 0.0);
    }
}
