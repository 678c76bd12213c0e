//! Core types for the group ledger
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Immutable facts: expenses and settlements are never edited after
//!   creation, only appended (or removed whole, by the original payer)
//! - Plain serde serialization (the service layer renders JSON; the ledger
//!   defines no wire format of its own)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

use crate::money;
use crate::{Error, Result};

/// Member identifier (user id owned by the external directory)
///
/// Opaque to the ledger beyond equality and ordering; display names and
/// emails live with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    /// Create new member ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an expense's amount is divided among participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Equal shares, leftover cents assigned to the first participants
    Equal,
    /// Caller-supplied shares
    Custom,
}

/// One participant's share of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Participant owing this share
    pub member: MemberId,

    /// Share amount (non-negative)
    pub share: Decimal,
}

/// Immutable expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense ID (UUIDv7 for time-ordering)
    pub expense_id: Uuid,

    /// Member who paid the full amount up front
    pub payer: MemberId,

    /// Total amount paid (positive)
    pub amount: Decimal,

    /// How the amount was divided
    pub split_type: SplitType,

    /// Per-participant shares; must sum to `amount`
    pub splits: Vec<Split>,

    /// Human-readable description
    pub description: String,

    /// Expense category
    pub category: String,

    /// When the expense occurred
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create an expense split equally among `participants`.
    ///
    /// Shares are resolved to whole cents via [`money::split_evenly`]; the
    /// leftover cents go one each to the first participants in the given
    /// order, so the shares always sum back to the amount.
    pub fn split_equally(
        payer: MemberId,
        amount: Decimal,
        participants: &[MemberId],
        description: impl Into<String>,
    ) -> Result<Self> {
        let shares = money::split_evenly(amount, participants.len())?;
        let splits = participants
            .iter()
            .cloned()
            .zip(shares)
            .map(|(member, share)| Split { member, share })
            .collect();

        Ok(Self {
            expense_id: Uuid::now_v7(),
            payer,
            amount,
            split_type: SplitType::Equal,
            splits,
            description: description.into(),
            category: "General".to_string(),
            date: Utc::now(),
        })
    }

    /// Create an expense with caller-supplied shares.
    ///
    /// The shares are not checked here; run the record through
    /// [`crate::LedgerValidator`] before trusting it.
    pub fn with_splits(
        payer: MemberId,
        amount: Decimal,
        splits: Vec<Split>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            expense_id: Uuid::now_v7(),
            payer,
            amount,
            split_type: SplitType::Custom,
            splits,
            description: description.into(),
            category: "General".to_string(),
            date: Utc::now(),
        }
    }

    /// Set the category (defaults to "General")
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sum of the per-participant shares
    pub fn split_total(&self) -> Decimal {
        self.splits.iter().map(|s| s.share).sum()
    }
}

/// Recorded real-world payment between two members
///
/// A settlement is a fact about the past ("B already paid A $30"), recorded
/// after the fact; it is never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique settlement ID (UUIDv7 for time-ordering)
    pub settlement_id: Uuid,

    /// Member who paid
    pub from: MemberId,

    /// Member who received
    pub to: MemberId,

    /// Amount paid (positive)
    pub amount: Decimal,

    /// Optional free-form note
    pub note: Option<String>,

    /// When the payment was made
    pub date: DateTime<Utc>,
}

impl Settlement {
    /// Record a payment from `from` to `to`
    pub fn new(from: MemberId, to: MemberId, amount: Decimal) -> Self {
        Self {
            settlement_id: Uuid::now_v7(),
            from,
            to,
            amount,
            note: None,
            date: Utc::now(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Snapshot of one group's full ledger
///
/// Materialized by the storage layer and handed to the settlement engine.
/// Balances are always recomputed from this full history, never persisted
/// or incrementally updated, so a statement is consistent with the ledger
/// as of the read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupLedger {
    /// Group ID
    pub group_id: Uuid,

    /// Group roster; members with no activity still get a zero balance
    pub members: BTreeSet<MemberId>,

    /// Expense history, append-only
    pub expenses: Vec<Expense>,

    /// Settlement history, append-only
    pub settlements: Vec<Settlement>,
}

impl GroupLedger {
    /// Create an empty ledger for a group
    pub fn new(group_id: Uuid) -> Self {
        Self {
            group_id,
            members: BTreeSet::new(),
            expenses: Vec::new(),
            settlements: Vec::new(),
        }
    }

    /// Add a member to the roster; returns false if already present
    pub fn add_member(&mut self, member: MemberId) -> bool {
        self.members.insert(member)
    }

    /// Append an expense record
    pub fn record_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Append a settlement record
    pub fn record_settlement(&mut self, settlement: Settlement) {
        self.settlements.push(settlement);
    }

    /// Remove a whole expense record.
    ///
    /// Only the original payer may remove an expense; there is no partial
    /// edit of history.
    pub fn remove_expense(&mut self, expense_id: Uuid, requested_by: &MemberId) -> Result<Expense> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.expense_id == expense_id)
            .ok_or_else(|| Error::ExpenseNotFound(expense_id.to_string()))?;

        if &self.expenses[idx].payer != requested_by {
            return Err(Error::NotPermitted(format!(
                "only the payer may remove expense {}",
                expense_id
            )));
        }

        Ok(self.expenses.remove(idx))
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of all settlement amounts
    pub fn total_settled(&self) -> Decimal {
        self.settlements.iter().map(|s| s.amount).sum()
    }

    /// True when the ledger has no recorded activity
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.settlements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> MemberId {
        MemberId::new(id)
    }

    #[test]
    fn test_equal_split_shares_sum_to_amount() {
        let participants = vec![member("a"), member("b"), member("c")];
        let expense = Expense::split_equally(
            member("a"),
            Decimal::new(10000, 2), // $100.00
            &participants,
            "groceries",
        )
        .unwrap();

        assert_eq!(expense.split_type, SplitType::Equal);
        assert_eq!(expense.splits.len(), 3);
        assert_eq!(expense.split_total(), expense.amount);
        // Leftover cent lands on the first participant
        assert_eq!(expense.splits[0].share, Decimal::new(3334, 2));
    }

    #[test]
    fn test_equal_split_rejects_empty_participants() {
        let result = Expense::split_equally(member("a"), Decimal::new(100, 2), &[], "nothing");
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_expense_payer_only() {
        let mut ledger = GroupLedger::new(Uuid::now_v7());
        ledger.add_member(member("a"));
        ledger.add_member(member("b"));

        let expense = Expense::split_equally(
            member("a"),
            Decimal::new(5000, 2),
            &[member("a"), member("b")],
            "dinner",
        )
        .unwrap();
        let expense_id = expense.expense_id;
        ledger.record_expense(expense);

        // Non-payer cannot remove
        let err = ledger.remove_expense(expense_id, &member("b")).unwrap_err();
        assert!(matches!(err, Error::NotPermitted(_)));
        assert_eq!(ledger.expenses.len(), 1);

        // Payer can
        let removed = ledger.remove_expense(expense_id, &member("a")).unwrap();
        assert_eq!(removed.expense_id, expense_id);
        assert!(ledger.expenses.is_empty());
    }

    #[test]
    fn test_remove_expense_unknown_id() {
        let mut ledger = GroupLedger::new(Uuid::now_v7());
        let err = ledger
            .remove_expense(Uuid::now_v7(), &member("a"))
            .unwrap_err();
        assert!(matches!(err, Error::ExpenseNotFound(_)));
    }

    #[test]
    fn test_ledger_totals() {
        let mut ledger = GroupLedger::new(Uuid::now_v7());
        ledger.add_member(member("a"));
        ledger.add_member(member("b"));

        ledger.record_expense(
            Expense::split_equally(
                member("a"),
                Decimal::new(9000, 2),
                &[member("a"), member("b")],
                "rent",
            )
            .unwrap(),
        );
        ledger.record_settlement(
            Settlement::new(member("b"), member("a"), Decimal::new(4500, 2)).with_note("venmo"),
        );

        assert_eq!(ledger.total_spent(), Decimal::new(9000, 2));
        assert_eq!(ledger.total_settled(), Decimal::new(4500, 2));
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_member_id_roundtrip() {
        let id = member("user-42");
        assert_eq!(id.as_str(), "user-42");
        assert_eq!(id.to_string(), "user-42");

        let json = serde_json::to_string(&id).unwrap();
        let back: MemberId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
