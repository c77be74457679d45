//! Greedy settlement resolver
//!
//! Produces the transfer plan for a balance sheet with a pairwise greedy
//! match:
//!
//! 1. Partition non-zero balances into debtors (tracked by `|balance|`
//!    remaining) and creditors (tracked by `balance` remaining)
//! 2. For each debtor, for each creditor: while both have remaining
//!    value, emit a transfer of `min(debtor.remaining,
//!    creditor.remaining)` and decrement both
//! 3. Stop when the debtors (equivalently the creditors) are exhausted
//!
//! The zero-sum invariant of the balance aggregator guarantees the two
//! sides carry equal value, so the loop always discharges everything.
//!
//! # Matching order
//!
//! The visit order is a policy choice, and an externally observable one:
//! it decides which pairs of people get a transfer suggestion.
//!
//! - [`MatchOrder::InsertionOrder`] walks both sides in the sheet's
//!   first-appearance order. Simple and stable, but not transfer-count
//!   minimal.
//! - [`MatchOrder::LargestFirst`] sorts both sides by magnitude,
//!   descending, before the same walk. Exact-size opposites meet early,
//!   so the plan tends to be shorter; the discharge guarantees are
//!   identical.
//!
//! "Non-zero" is read through [`DUST_TOLERANCE`]: floating residue left
//! by uncorrected equal splits never becomes a transfer.

use serde::{Deserialize, Serialize};

use crate::balance::BalanceSheet;
use crate::models::settlement::Settlement;

/// Balances at or below this magnitude are treated as already settled.
///
/// Far below any representable currency amount; only absorbs accumulated
/// f64 rounding from the split calculator.
pub const DUST_TOLERANCE: f64 = 1e-9;

/// Order in which debtors and creditors are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    /// First-appearance order from the balance sheet (no sorting)
    #[default]
    InsertionOrder,

    /// Largest magnitude first on both sides; ties keep insertion order
    LargestFirst,
}

/// A participant's undischarged value during matching
struct OpenPosition {
    participant: String,
    remaining: f64,
}

/// Compute the transfer plan that zeroes a balance sheet.
///
/// # Arguments
///
/// * `sheet` - Net balances for one group
/// * `order` - Matching-order policy (see [`MatchOrder`])
///
/// # Returns
///
/// Directed transfers, each strictly positive, whose application via
/// [`BalanceSheet::apply`] drives every balance to zero. An all-zero
/// sheet yields an empty plan.
///
/// # Example
/// ```
/// use split_ledger_core_rs::{compute_settlements, BalanceSheet, MatchOrder};
///
/// let mut sheet = BalanceSheet::new();
/// sheet.add("alice", 200.0);
/// sheet.add("bob", -100.0);
/// sheet.add("carol", -100.0);
///
/// let plan = compute_settlements(&sheet, MatchOrder::InsertionOrder);
///
/// assert_eq!(plan.len(), 2);
/// assert_eq!((plan[0].from.as_str(), plan[0].to.as_str()), ("bob", "alice"));
/// assert_eq!((plan[1].from.as_str(), plan[1].to.as_str()), ("carol", "alice"));
/// assert_eq!(plan[0].amount, 100.0);
/// ```
pub fn compute_settlements(sheet: &BalanceSheet, order: MatchOrder) -> Vec<Settlement> {
    let mut debtors: Vec<OpenPosition> = Vec::new();
    let mut creditors: Vec<OpenPosition> = Vec::new();

    for (participant, balance) in sheet.iter() {
        if balance < -DUST_TOLERANCE {
            debtors.push(OpenPosition {
                participant: participant.to_string(),
                remaining: -balance,
            });
        } else if balance > DUST_TOLERANCE {
            creditors.push(OpenPosition {
                participant: participant.to_string(),
                remaining: balance,
            });
        }
    }

    if let MatchOrder::LargestFirst = order {
        // Stable sorts, so equal magnitudes stay in insertion order
        debtors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
        creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
    }

    let mut settlements = Vec::new();

    for debtor in &mut debtors {
        for creditor in &mut creditors {
            if debtor.remaining <= DUST_TOLERANCE {
                break;
            }
            if creditor.remaining <= DUST_TOLERANCE {
                continue;
            }

            let amount = debtor.remaining.min(creditor.remaining);
            settlements.push(Settlement {
                from: debtor.participant.clone(),
                to: creditor.participant.clone(),
                amount,
            });

            debtor.remaining -= amount;
            creditor.remaining -= amount;
        }
    }

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_of(entries: &[(&str, f64)]) -> BalanceSheet {
        let mut sheet = BalanceSheet::new();
        for (participant, amount) in entries {
            sheet.add(participant, *amount);
        }
        sheet
    }

    #[test]
    fn test_single_pair_single_transfer() {
        let sheet = sheet_of(&[("a", 60.0), ("b", -60.0)]);

        let plan = compute_settlements(&sheet, MatchOrder::InsertionOrder);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].from, "b");
        assert_eq!(plan[0].to, "a");
        assert_eq!(plan[0].amount, 60.0);
    }

    #[test]
    fn test_all_zero_sheet_yields_empty_plan() {
        let sheet = sheet_of(&[("a", 0.0), ("b", 0.0)]);

        assert!(compute_settlements(&sheet, MatchOrder::InsertionOrder).is_empty());
    }

    #[test]
    fn test_dust_balances_are_not_transferred() {
        let sheet = sheet_of(&[("a", 1e-12), ("b", -1e-12)]);

        assert!(compute_settlements(&sheet, MatchOrder::InsertionOrder).is_empty());
    }

    #[test]
    fn test_debtor_split_across_creditors() {
        // b owes 100, covered by two creditors in sheet order
        let sheet = sheet_of(&[("a", 70.0), ("c", 30.0), ("b", -100.0)]);

        let plan = compute_settlements(&sheet, MatchOrder::InsertionOrder);

        assert_eq!(plan.len(), 2);
        assert_eq!((plan[0].from.as_str(), plan[0].to.as_str()), ("b", "a"));
        assert_eq!(plan[0].amount, 70.0);
        assert_eq!((plan[1].from.as_str(), plan[1].to.as_str()), ("b", "c"));
        assert_eq!(plan[1].amount, 30.0);
    }

    #[test]
    fn test_largest_first_finds_exact_matches() {
        // Insertion order would emit 3 transfers; largest-first pairs the
        // exact opposites and emits 2
        let sheet = sheet_of(&[("a", 30.0), ("b", 70.0), ("c", -70.0), ("d", -30.0)]);

        let in_order = compute_settlements(&sheet, MatchOrder::InsertionOrder);
        let largest = compute_settlements(&sheet, MatchOrder::LargestFirst);

        assert_eq!(in_order.len(), 3);
        assert_eq!(largest.len(), 2);
        assert_eq!((largest[0].from.as_str(), largest[0].to.as_str()), ("c", "b"));
        assert_eq!(largest[0].amount, 70.0);
        assert_eq!((largest[1].from.as_str(), largest[1].to.as_str()), ("d", "a"));
        assert_eq!(largest[1].amount, 30.0);
    }

    #[test]
    fn test_every_amount_strictly_positive() {
        let sheet = sheet_of(&[("a", 25.5), ("b", 10.0), ("c", -20.0), ("d", -15.5)]);

        let plan = compute_settlements(&sheet, MatchOrder::InsertionOrder);

        assert!(plan.iter().all(|s| s.amount > 0.0));
    }
}
