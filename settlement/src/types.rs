//! Core types for balance computation and settlement planning

use chrono::{DateTime, Utc};
use ledger_core::MemberId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One member's position in a group
///
/// Tracks the gross legs separately so callers can show "you paid X, your
/// share was Y" breakdowns; the signed net is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// Member ID
    pub member: MemberId,

    /// Total fronted for the group (expense amounts paid)
    pub total_paid: Decimal,

    /// Total owed for consumption (expense shares)
    pub total_share: Decimal,

    /// Total already paid out via recorded settlements
    pub settled_out: Decimal,

    /// Total already received via recorded settlements
    pub settled_in: Decimal,
}

impl MemberBalance {
    /// Create a zero position
    pub fn new(member: MemberId) -> Self {
        Self {
            member,
            total_paid: Decimal::ZERO,
            total_share: Decimal::ZERO,
            settled_out: Decimal::ZERO,
            settled_in: Decimal::ZERO,
        }
    }

    /// Signed net balance
    ///
    /// Positive = the group owes this member; negative = the member owes
    /// the group; zero = settled.
    pub fn net(&self) -> Decimal {
        self.total_paid - self.total_share + self.settled_out - self.settled_in
    }

    /// Check if net creditor beyond `tolerance`
    pub fn is_creditor(&self, tolerance: Decimal) -> bool {
        self.net() > tolerance
    }

    /// Check if net debtor beyond `tolerance`
    pub fn is_debtor(&self, tolerance: Decimal) -> bool {
        self.net() < -tolerance
    }

    /// Absolute net balance
    pub fn abs_net(&self) -> Decimal {
        self.net().abs()
    }
}

/// Suggested transfer that reduces outstanding balances
///
/// Transient: recomputed each time balances are requested, never persisted.
/// Recording an actual payment is the caller's separate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSuggestion {
    /// Member who should pay
    pub from: MemberId,

    /// Member who should receive
    pub to: MemberId,

    /// Transfer amount (positive, whole cents)
    pub amount: Decimal,
}

/// Full statement for one group's ledger snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStatement {
    /// Group ID
    pub group_id: Uuid,

    /// Members with a position (roster plus anyone referenced by a record)
    pub member_count: usize,

    /// Expenses folded in
    pub expense_count: usize,

    /// Settlements folded in
    pub settlement_count: usize,

    /// Sum of all expense amounts
    pub total_spent: Decimal,

    /// Sum of all recorded settlement amounts
    pub total_settled: Decimal,

    /// Sum of positive balances (== what the suggested transfers move)
    pub total_outstanding: Decimal,

    /// Signed net balance per member
    pub balances: BTreeMap<MemberId, Decimal>,

    /// Gross position breakdown per member
    pub positions: BTreeMap<MemberId, MemberBalance>,

    /// Suggested transfers, in plan order
    pub suggestions: Vec<SettlementSuggestion>,

    /// When this statement was computed
    pub computed_at: DateTime<Utc>,
}

impl GroupStatement {
    /// Total amount moved by the suggested transfers
    pub fn total_suggested(&self) -> Decimal {
        self.suggestions.iter().map(|s| s.amount).sum()
    }

    /// True when no transfer is needed
    pub fn is_settled(&self) -> bool {
        self.suggestions.is_empty()
    }
}
