//! Split Ledger Core - Rust Engine
//!
//! Shared-expense ledger engine: splits, net balances, and settlement
//! plans for groups of people splitting bills.
//!
//! # Architecture
//!
//! - **models**: Domain types (Expense, Split, Settlement, LedgerEvent)
//! - **split**: Split calculator (equal / percentage / unequal strategies)
//! - **balance**: Balance aggregator (expense history → net balances)
//! - **settlement**: Settlement resolver (net balances → transfer plan)
//! - **ledger**: Per-group container tying the pipeline together
//!
//! Data flows one way: the split calculator's output is embedded in each
//! expense, the aggregator folds many expenses into a balance sheet, and
//! the resolver reduces the sheet to transfers. Nothing here touches
//! storage, transport, or identity beyond opaque participant strings.
//!
//! # Critical Invariants
//!
//! 1. Every expense's splits sum to its total within the strategy's
//!    tolerance (enforced at creation, all-or-nothing)
//! 2. Balance sheets are zero-sum within floating tolerance
//! 3. Settlement plans fully discharge every balance with strictly
//!    positive transfers
//! 4. All computations are pure and synchronous — same input, same output

// Module declarations
pub mod balance;
pub mod ledger;
pub mod models;
pub mod settlement;
pub mod split;

// Re-exports for convenience
pub use balance::{compute_balances, BalanceSheet, ZERO_SUM_TOLERANCE};
pub use ledger::{GroupLedger, LedgerError};
pub use models::{
    event::{EventLog, LedgerEvent},
    expense::{Expense, Split, SplitStrategy},
    settlement::Settlement,
};
pub use settlement::{compute_settlements, MatchOrder, DUST_TOLERANCE};
pub use split::{
    compute_splits, SplitError, SplitSpec, PERCENT_SUM_TOLERANCE, UNEQUAL_TOTAL_TOLERANCE,
};
