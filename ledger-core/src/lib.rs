//! SplitFair Ledger Core
//!
//! Group-ledger data model for shared-expense tracking: members, expenses
//! with per-participant splits, and recorded settlements.
//!
//! # Architecture
//!
//! - **Immutable facts**: Expenses and settlements are never edited after
//!   creation; an expense may only be removed whole, by its original payer
//! - **Derived balances**: Who-owes-whom is recomputed from the full
//!   history on every read (see the `settlement` crate), never persisted
//! - **Exact arithmetic**: All money is `Decimal`, resolved to whole cents
//!
//! # Invariants
//!
//! - Split conservation: Σ(shares) == expense amount for every expense
//! - Equal splits are deterministic: leftover cents go to the first
//!   participants in roster order
//! - Validation is fail-fast and synchronous; the model performs no I/O

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// Re-exports
pub use error::{Error, Result};
pub use types::{Expense, GroupLedger, MemberId, Settlement, Split, SplitType};
pub use validation::LedgerValidator;
