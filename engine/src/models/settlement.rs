//! Settlement model
//!
//! A settlement is a suggested directed transfer that discharges debt
//! between two participants. Settlements are derived, ephemeral values:
//! a settlement list is only valid against the balance sheet that
//! produced it and goes stale the moment a new expense is recorded.
//! Nothing in the engine persists them or marks them "paid".

use serde::{Deserialize, Serialize};

/// A suggested transfer: `from` (the debtor) pays `to` (the creditor).
///
/// `amount` is always strictly positive; the resolver never emits
/// zero-value or dust transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Debtor participant ID
    pub from: String,

    /// Creditor participant ID
    pub to: String,

    /// Transfer amount (strictly positive)
    pub amount: f64,
}
