//! Main settlement engine
//!
//! Orchestrates validation, balance computation, and settlement planning
//! for one ledger snapshot. This is the only layer that logs; the pure
//! computations below it never do.

use ledger_core::{GroupLedger, LedgerValidator, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::{
    balance::BalanceEngine,
    config::Config,
    planner::SettlementPlanner,
    types::{GroupStatement, SettlementSuggestion},
    Result,
};

/// Settlement engine
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    /// Record validator
    validator: LedgerValidator,

    /// Balance engine
    balance: BalanceEngine,

    /// Settlement planner
    planner: SettlementPlanner,
}

impl SettlementEngine {
    /// Create new settlement engine
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            validator: LedgerValidator::new(config.share_tolerance),
            balance: BalanceEngine::new(),
            planner: SettlementPlanner::new(config.tolerance),
        })
    }

    /// Compute a full statement for a group's ledger snapshot.
    ///
    /// Validates every record, folds the history into per-member positions,
    /// and plans the transfers that would settle the group.
    ///
    /// The statement is consistent with the snapshot as of the read.
    /// Recording one of the suggested payments is a separate, non-atomic
    /// step: another writer may append to the group's ledger in between,
    /// making the plan stale. Callers needing stronger guarantees must
    /// version the ledger at the storage layer.
    pub fn statement(&self, ledger: &GroupLedger) -> Result<GroupStatement> {
        self.validator.validate_ledger(ledger)?;

        let positions =
            self.balance
                .compute_positions(&ledger.expenses, &ledger.settlements, &ledger.members);
        let balances: BTreeMap<MemberId, Decimal> = positions
            .iter()
            .map(|(member, position)| (member.clone(), position.net()))
            .collect();
        let suggestions = self.planner.plan(&balances);

        let total_outstanding: Decimal = balances
            .values()
            .filter(|balance| **balance > Decimal::ZERO)
            .copied()
            .sum();

        tracing::info!(
            "Statement for group {}: {} members, {} outstanding, {} suggested transfers",
            ledger.group_id,
            balances.len(),
            total_outstanding,
            suggestions.len()
        );

        Ok(GroupStatement {
            group_id: ledger.group_id,
            member_count: balances.len(),
            expense_count: ledger.expenses.len(),
            settlement_count: ledger.settlements.len(),
            total_spent: ledger.total_spent(),
            total_settled: ledger.total_settled(),
            total_outstanding,
            balances,
            positions,
            suggestions,
            computed_at: chrono::Utc::now(),
        })
    }

    /// Plan transfers directly from precomputed balances.
    ///
    /// For callers that already hold a balance mapping and only want the
    /// plan recomputed.
    pub fn plan(&self, balances: &BTreeMap<MemberId, Decimal>) -> Vec<SettlementSuggestion> {
        self.planner.plan(balances)
    }
}
