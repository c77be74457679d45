//! Split Calculator
//!
//! Converts an expense entry (total amount + participant set + split
//! strategy inputs) into a concrete list of per-participant owed amounts,
//! and validates the strategy's arithmetic invariants.
//!
//! # Strategies
//!
//! 1. **Equal**: each of the `n` participants owes `total / n`. No
//!    remainder correction is applied, so the shares may sum to the total
//!    off by floating epsilon only.
//! 2. **Percentage**: each participant owes `total * share / 100`. The
//!    shares must sum to 100 within [`PERCENT_SUM_TOLERANCE`].
//! 3. **Unequal**: owed amounts are supplied directly and must sum to the
//!    total within [`UNEQUAL_TOTAL_TOLERANCE`].
//!
//! # Critical Invariants
//!
//! 1. Validation is all-or-nothing: on any error no splits are computed
//!    and no downstream state is touched
//! 2. Each failing invariant maps to its own [`SplitError`] variant so a
//!    UI can explain the rejection
//! 3. A participant missing from a percentage/unequal input map
//!    contributes 0 (and owes 0 if the remaining inputs still validate)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::expense::{Split, SplitStrategy};

/// Allowed deviation when checking that percentage shares sum to 100.
///
/// The user-facing contract is "percentages must sum to 100"; the
/// tolerance only absorbs floating-point summation noise (e.g.
/// 33.4 + 33.3 + 33.3).
pub const PERCENT_SUM_TOLERANCE: f64 = 1e-6;

/// Allowed deviation between the sum of unequal amounts and the expense
/// total, in currency units. Looser than the percentage check so that
/// hand-entered two-decimal amounts round-trip.
pub const UNEQUAL_TOTAL_TOLERANCE: f64 = 0.01;

/// Errors that can occur during split computation.
///
/// Every variant is caller-recoverable: the caller re-prompts with
/// corrected input and retries. No partial state is ever left behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("Total amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("Participant set is empty")]
    NoParticipants,

    #[error("Percentages must sum to 100, got {sum}")]
    PercentageSumMismatch { sum: f64 },

    #[error("Split amounts sum to {sum}, expected {total}")]
    UnequalTotalMismatch { sum: f64, total: f64 },
}

/// Split strategy plus its per-participant inputs.
///
/// Input maps are keyed by participant ID; a participant absent from the
/// map contributes 0.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use split_ledger_core_rs::SplitSpec;
///
/// let shares = HashMap::from([
///     ("alice".to_string(), 40.0),
///     ("bob".to_string(), 60.0),
/// ]);
/// let spec = SplitSpec::Percentage { shares };
/// assert_eq!(spec.strategy().as_str(), "percentage");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SplitSpec {
    /// Divide the total evenly across all participants
    Equal,

    /// Divide by caller-supplied percentages (must sum to 100)
    Percentage { shares: HashMap<String, f64> },

    /// Caller supplies each participant's absolute amount
    Unequal { amounts: HashMap<String, f64> },
}

impl SplitSpec {
    /// The strategy tag recorded on every split this spec produces
    pub fn strategy(&self) -> SplitStrategy {
        match self {
            SplitSpec::Equal => SplitStrategy::Equal,
            SplitSpec::Percentage { .. } => SplitStrategy::Percentage,
            SplitSpec::Unequal { .. } => SplitStrategy::Unequal,
        }
    }
}

/// Compute the per-participant splits for an expense.
///
/// # Arguments
///
/// * `total_amount` - Total expense amount (must be positive)
/// * `participants` - Participants sharing the expense, in order; the
///   returned splits preserve this order
/// * `spec` - Strategy and its inputs
///
/// # Returns
///
/// One [`Split`] per participant, or the specific [`SplitError`] whose
/// invariant failed. On error nothing has been computed or mutated.
///
/// # Example
/// ```
/// use split_ledger_core_rs::{compute_splits, SplitSpec};
///
/// let members = vec!["alice".to_string(), "bob".to_string()];
/// let splits = compute_splits(90.0, &members, &SplitSpec::Equal).unwrap();
///
/// assert_eq!(splits.len(), 2);
/// assert_eq!(splits[0].owed_amount, 45.0);
/// assert_eq!(splits[0].participant, "alice");
/// ```
pub fn compute_splits(
    total_amount: f64,
    participants: &[String],
    spec: &SplitSpec,
) -> Result<Vec<Split>, SplitError> {
    // `!(x > 0.0)` also rejects NaN totals
    if !(total_amount > 0.0) {
        return Err(SplitError::NonPositiveAmount {
            amount: total_amount,
        });
    }
    if participants.is_empty() {
        return Err(SplitError::NoParticipants);
    }

    let strategy = spec.strategy();

    match spec {
        SplitSpec::Equal => {
            let share = total_amount / participants.len() as f64;
            Ok(participants
                .iter()
                .map(|participant| Split {
                    participant: participant.clone(),
                    owed_amount: share,
                    strategy,
                    percentage: None,
                })
                .collect())
        }

        SplitSpec::Percentage { shares } => {
            let sum: f64 = participants
                .iter()
                .map(|p| shares.get(p).copied().unwrap_or(0.0))
                .sum();
            // Negated form so a NaN sum is rejected, not waved through
            if !((sum - 100.0).abs() <= PERCENT_SUM_TOLERANCE) {
                return Err(SplitError::PercentageSumMismatch { sum });
            }

            Ok(participants
                .iter()
                .map(|participant| {
                    let percentage = shares.get(participant).copied().unwrap_or(0.0);
                    Split {
                        participant: participant.clone(),
                        owed_amount: total_amount * percentage / 100.0,
                        strategy,
                        percentage: Some(percentage),
                    }
                })
                .collect())
        }

        SplitSpec::Unequal { amounts } => {
            let sum: f64 = participants
                .iter()
                .map(|p| amounts.get(p).copied().unwrap_or(0.0))
                .sum();
            // Accepts iff the mismatch is strictly under the tolerance
            if !((sum - total_amount).abs() < UNEQUAL_TOTAL_TOLERANCE) {
                return Err(SplitError::UnequalTotalMismatch {
                    sum,
                    total: total_amount,
                });
            }

            Ok(participants
                .iter()
                .map(|participant| Split {
                    participant: participant.clone(),
                    owed_amount: amounts.get(participant).copied().unwrap_or(0.0),
                    strategy,
                    percentage: None,
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_equal_split_preserves_participant_order() {
        let group = members(&["c", "a", "b"]);
        let splits = compute_splits(30.0, &group, &SplitSpec::Equal).unwrap();

        let order: Vec<&str> = splits.iter().map(|s| s.participant.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_zero_total_rejected() {
        let group = members(&["a"]);
        let result = compute_splits(0.0, &group, &SplitSpec::Equal);

        assert_eq!(
            result,
            Err(SplitError::NonPositiveAmount { amount: 0.0 })
        );
    }

    #[test]
    fn test_nan_total_rejected() {
        let group = members(&["a"]);
        let result = compute_splits(f64::NAN, &group, &SplitSpec::Equal);

        assert!(matches!(
            result,
            Err(SplitError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_empty_participants_rejected() {
        let result = compute_splits(100.0, &[], &SplitSpec::Equal);

        assert_eq!(result, Err(SplitError::NoParticipants));
    }

    #[test]
    fn test_percentage_missing_share_counts_as_zero() {
        let group = members(&["a", "b"]);
        let shares = HashMap::from([("a".to_string(), 100.0)]);

        let splits = compute_splits(80.0, &group, &SplitSpec::Percentage { shares }).unwrap();

        assert_eq!(splits[0].owed_amount, 80.0);
        assert_eq!(splits[1].owed_amount, 0.0);
        assert_eq!(splits[1].percentage, Some(0.0));
    }

    #[test]
    fn test_percentage_sum_tolerance_absorbs_float_noise() {
        let group = members(&["a", "b", "c"]);
        // 33.4 + 33.3 + 33.3 is not exactly 100.0 in f64
        let shares = HashMap::from([
            ("a".to_string(), 33.4),
            ("b".to_string(), 33.3),
            ("c".to_string(), 33.3),
        ]);

        let result = compute_splits(100.0, &group, &SplitSpec::Percentage { shares });
        assert!(result.is_ok());
    }

    #[test]
    fn test_unequal_error_reports_both_sums() {
        let group = members(&["a", "b"]);
        let amounts = HashMap::from([("a".to_string(), 10.0), ("b".to_string(), 20.0)]);

        let result = compute_splits(50.0, &group, &SplitSpec::Unequal { amounts });

        assert_eq!(
            result,
            Err(SplitError::UnequalTotalMismatch {
                sum: 30.0,
                total: 50.0
            })
        );
    }
}
