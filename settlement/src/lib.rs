//! SplitFair Settlement Engine
//!
//! Derives who-owes-whom from a group's expense and settlement history and
//! plans a small set of transfers that settles the group.
//!
//! # Architecture
//!
//! 1. **Validation**: Every ledger record is checked before use
//! 2. **Balances**: The full history folds into one signed net amount per
//!    member (positive = the group owes them)
//! 3. **Planning**: Debtors are greedily matched against creditors,
//!    largest first, until every balance is within tolerance of zero
//!
//! Both computations are pure and synchronous: no I/O, no shared state, no
//! logging below the [`SettlementEngine`] facade. Computing a plan and
//! recording an actual payment are separate steps by design.
//!
//! # Example
//!
//! ```
//! use ledger_core::{Expense, GroupLedger, MemberId};
//! use rust_decimal::Decimal;
//! use settlement::{Config, SettlementEngine};
//! use uuid::Uuid;
//!
//! fn main() -> settlement::Result<()> {
//!     let alice = MemberId::new("alice");
//!     let bob = MemberId::new("bob");
//!
//!     let mut ledger = GroupLedger::new(Uuid::now_v7());
//!     ledger.add_member(alice.clone());
//!     ledger.add_member(bob.clone());
//!     ledger.record_expense(Expense::split_equally(
//!         alice.clone(),
//!         Decimal::new(4000, 2), // $40.00
//!         &[alice.clone(), bob.clone()],
//!         "pizza",
//!     )?);
//!
//!     let engine = SettlementEngine::new(Config::default())?;
//!     let statement = engine.statement(&ledger)?;
//!
//!     // Bob owes Alice $20.00
//!     assert_eq!(statement.suggestions.len(), 1);
//!     assert_eq!(statement.suggestions[0].amount, Decimal::new(2000, 2));
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod balance;
pub mod config;
pub mod engine;
pub mod error;
pub mod planner;
pub mod types;

// Re-exports
pub use balance::BalanceEngine;
pub use config::Config;
pub use engine::SettlementEngine;
pub use error::{Error, Result};
pub use planner::{SettlementPlanner, DEFAULT_TOLERANCE};
pub use types::{GroupStatement, MemberBalance, SettlementSuggestion};
