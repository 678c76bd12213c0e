//! Settlement planning
//!
//! Greedy matching of debtors against creditors, largest first.
//!
//! # Algorithm
//!
//! 1. Partition members: balance above tolerance = creditor, below negative
//!    tolerance = debtor, within tolerance = already settled
//! 2. Sort both sides by magnitude descending (member id as tie-break)
//! 3. Walk both lists with two cursors, transferring
//!    `min(debtor remaining, creditor remaining)` at each step
//!
//! Largest-first matching keeps the transaction count low in the common
//! case; true minimum-transaction matching is NP-hard, so the greedy walk
//! is the accepted tradeoff. The sort makes the plan deterministic for a
//! given balance mapping.
//!
//! # Example
//!
//! ```text
//! Balances:
//!   A: +300    B: -100    C: -100    D: -100
//!
//! Plan:
//!   B pays A: 100
//!   C pays A: 100
//!   D pays A: 100
//! ```

use ledger_core::{money, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::types::SettlementSuggestion;

/// Default tolerance: one cent
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Settlement planner
///
/// Stateless apart from the tolerance; pure and safe to call concurrently.
#[derive(Debug, Clone, Copy)]
pub struct SettlementPlanner {
    /// Balances within this of zero are treated as settled
    tolerance: Decimal,
}

impl SettlementPlanner {
    /// Create a planner with the given tolerance
    pub fn new(tolerance: Decimal) -> Self {
        Self { tolerance }
    }

    /// Tolerance in use
    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    /// Plan transfers that bring every balance within tolerance of zero.
    ///
    /// Transfers move the exact min of the two sides; an amount is rounded
    /// down to whole cents only when both leftovers stay within tolerance
    /// (the final clamp of a pair). A full walk never strands a residue
    /// above tolerance, never shifts dust onto a counterparty, and never
    /// emits a zero-amount suggestion.
    pub fn plan(&self, balances: &BTreeMap<MemberId, Decimal>) -> Vec<SettlementSuggestion> {
        let mut creditors: Vec<(MemberId, Decimal)> = Vec::new();
        let mut debtors: Vec<(MemberId, Decimal)> = Vec::new();

        for (member, &balance) in balances {
            if balance > self.tolerance {
                creditors.push((member.clone(), balance));
            } else if balance < -self.tolerance {
                debtors.push((member.clone(), -balance));
            }
        }

        // Magnitude descending, member id ascending as tie-break
        debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut suggestions = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < debtors.len() && j < creditors.len() {
            let raw = debtors[i].1.min(creditors[j].1);
            let truncated = money::truncate_to_cents(raw);
            // Whole cents are preferred, but only when both leftovers stay
            // within tolerance; otherwise transfer the exact min so no dust
            // shifts onto the counterparty
            let transfer = if !truncated.is_zero()
                && debtors[i].1 - truncated <= self.tolerance
                && creditors[j].1 - truncated <= self.tolerance
            {
                truncated
            } else {
                raw
            };

            suggestions.push(SettlementSuggestion {
                from: debtors[i].0.clone(),
                to: creditors[j].0.clone(),
                amount: transfer,
            });

            debtors[i].1 -= transfer;
            creditors[j].1 -= transfer;

            // Leftovers within tolerance are clamped away
            if debtors[i].1 <= self.tolerance {
                i += 1;
            }
            if creditors[j].1 <= self.tolerance {
                j += 1;
            }
        }

        suggestions
    }
}

impl Default for SettlementPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
