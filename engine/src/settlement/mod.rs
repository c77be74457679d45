//! Settlement Module
//!
//! Reduces a group's net-balance mapping to an ordered list of directed
//! transfers (debtor → creditor) that collectively zero every balance.
//!
//! # Critical Invariants
//!
//! 1. **Full discharge**: applying every emitted settlement to the
//!    originating balance sheet yields the zero sheet
//! 2. **Conservation**: the sum of emitted amounts equals the sum of all
//!    positive balances (equivalently, of all debts)
//! 3. **Strict positivity**: no zero-value or dust transfers are emitted
//!
//! The matching is greedy and pairwise, selected by [`MatchOrder`]; it is
//! correct but not guaranteed transfer-count-minimal. Settlement plans are
//! ephemeral — valid only against the balance sheet that produced them.
//!
//! # Example
//!
//! ```rust
//! use split_ledger_core_rs::{compute_settlements, BalanceSheet, MatchOrder};
//!
//! let mut sheet = BalanceSheet::new();
//! sheet.add("alice", 60.0);
//! sheet.add("bob", -60.0);
//!
//! let plan = compute_settlements(&sheet, MatchOrder::default());
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from, "bob");
//! assert_eq!(plan[0].to, "alice");
//! assert_eq!(plan[0].amount, 60.0);
//! ```

pub mod resolver;

// Re-export public API
pub use resolver::{compute_settlements, MatchOrder, DUST_TOLERANCE};
