//! Balance computation
//!
//! Folds a group's expense and settlement history into per-member net
//! balances:
//!
//! 1. Every roster member starts at zero (no activity = settled)
//! 2. Each expense credits its payer with the full amount and debits every
//!    participant with their share
//! 3. Each recorded settlement credits the payer and debits the receiver
//!
//! Every step is plain addition over a commutative group, so the result is
//! independent of record order, and every debit has a matching credit, so
//! the balances always sum to zero (up to sub-cent dust in the input).
//!
//! # Example
//!
//! ```text
//! A pays $90 split equally among A, B, C ($30 each):
//!   A: +90 − 30 = +60    B: −30    C: −30
//! B pays A $30, recorded as a settlement:
//!   A: +60 − 30 = +30    B: −30 + 30 = 0    C: −30
//! ```

use ledger_core::{Expense, MemberId, Settlement};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

use crate::types::MemberBalance;

/// Balance engine
///
/// Stateless and pure: no I/O, no logging, no shared mutable state. Safe to
/// call concurrently; identical input always yields identical output. Total
/// over well-formed input; malformed records are the validator's job to
/// reject before they get here.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceEngine;

impl BalanceEngine {
    /// Create new balance engine
    pub fn new() -> Self {
        Self
    }

    /// Compute per-member gross positions.
    ///
    /// Every member in `members` appears in the result, defaulting to a
    /// zero position. A member referenced by a record but absent from the
    /// roster is added rather than dropped.
    pub fn compute_positions(
        &self,
        expenses: &[Expense],
        settlements: &[Settlement],
        members: &BTreeSet<MemberId>,
    ) -> BTreeMap<MemberId, MemberBalance> {
        let mut positions: BTreeMap<MemberId, MemberBalance> = members
            .iter()
            .map(|m| (m.clone(), MemberBalance::new(m.clone())))
            .collect();

        for expense in expenses {
            positions
                .entry(expense.payer.clone())
                .or_insert_with(|| MemberBalance::new(expense.payer.clone()))
                .total_paid += expense.amount;

            for split in &expense.splits {
                positions
                    .entry(split.member.clone())
                    .or_insert_with(|| MemberBalance::new(split.member.clone()))
                    .total_share += split.share;
            }
        }

        for settlement in settlements {
            positions
                .entry(settlement.from.clone())
                .or_insert_with(|| MemberBalance::new(settlement.from.clone()))
                .settled_out += settlement.amount;

            positions
                .entry(settlement.to.clone())
                .or_insert_with(|| MemberBalance::new(settlement.to.clone()))
                .settled_in += settlement.amount;
        }

        positions
    }

    /// Compute signed net balances.
    ///
    /// Positive = the group owes this member; negative = the member owes
    /// the group.
    pub fn compute_balances(
        &self,
        expenses: &[Expense],
        settlements: &[Settlement],
        members: &BTreeSet<MemberId>,
    ) -> BTreeMap<MemberId, Decimal> {
        self.compute_positions(expenses, settlements, members)
            .into_iter()
            .map(|(member, position)| (member, position.net()))
            .collect()
    }
}
