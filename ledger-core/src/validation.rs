//! Validation for ledger records
//!
//! - Expense: positive amount, at least one split, no negative share,
//!   shares sum to the amount within tolerance
//! - Settlement: positive amount, payer != receiver
//!
//! Validation runs before records reach the balance computation; the
//! computation itself is total over well-formed input and never fails.

use rust_decimal::Decimal;

use crate::types::{Expense, GroupLedger, Settlement};
use crate::{Error, Result};

/// Validator for ledger records
///
/// Holds the tolerance used when comparing a split sum against its expense
/// amount; everything else is stateless.
#[derive(Debug, Clone)]
pub struct LedgerValidator {
    /// Allowed gap between an expense amount and the sum of its shares
    share_tolerance: Decimal,
}

impl LedgerValidator {
    /// Create a validator with the given share tolerance
    pub fn new(share_tolerance: Decimal) -> Self {
        Self { share_tolerance }
    }

    /// Validate a single expense record
    pub fn validate_expense(&self, expense: &Expense) -> Result<()> {
        if expense.amount <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "expense {} amount must be positive: {}",
                expense.expense_id, expense.amount
            )));
        }

        if expense.splits.is_empty() {
            return Err(Error::Validation(format!(
                "expense {} has no splits",
                expense.expense_id
            )));
        }

        for split in &expense.splits {
            if split.share < Decimal::ZERO {
                return Err(Error::Validation(format!(
                    "expense {} has negative share {} for {}",
                    expense.expense_id, split.share, split.member
                )));
            }
        }

        let total = expense.split_total();
        if (total - expense.amount).abs() > self.share_tolerance {
            return Err(Error::Validation(format!(
                "expense {} splits sum to {} but amount is {}",
                expense.expense_id, total, expense.amount
            )));
        }

        Ok(())
    }

    /// Validate a single settlement record
    pub fn validate_settlement(&self, settlement: &Settlement) -> Result<()> {
        if settlement.amount <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "settlement {} amount must be positive: {}",
                settlement.settlement_id, settlement.amount
            )));
        }

        if settlement.from == settlement.to {
            return Err(Error::Validation(format!(
                "settlement {} payer and receiver cannot be the same: {}",
                settlement.settlement_id, settlement.from
            )));
        }

        Ok(())
    }

    /// Validate every record in a ledger, fail-fast
    pub fn validate_ledger(&self, ledger: &GroupLedger) -> Result<()> {
        for expense in &ledger.expenses {
            self.validate_expense(expense)?;
        }
        for settlement in &ledger.settlements {
            self.validate_settlement(settlement)?;
        }
        Ok(())
    }
}

impl Default for LedgerValidator {
    fn default() -> Self {
        // One cent
        Self::new(Decimal::new(1, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MemberId, Split};

    fn member(id: &str) -> MemberId {
        MemberId::new(id)
    }

    fn expense_with_shares(amount: i64, shares: &[i64]) -> Expense {
        let splits = shares
            .iter()
            .enumerate()
            .map(|(i, &cents)| Split {
                member: member(&format!("m{}", i)),
                share: Decimal::new(cents, 2),
            })
            .collect();
        Expense::with_splits(member("payer"), Decimal::new(amount, 2), splits, "test")
    }

    #[test]
    fn test_valid_expense_passes() {
        let validator = LedgerValidator::default();
        let expense = expense_with_shares(10000, &[5000, 5000]);
        assert!(validator.validate_expense(&expense).is_ok());
    }

    #[test]
    fn test_split_sum_within_tolerance_passes() {
        let validator = LedgerValidator::default();
        // Off by exactly one cent
        let expense = expense_with_shares(10000, &[5000, 4999]);
        assert!(validator.validate_expense(&expense).is_ok());
    }

    #[test]
    fn test_split_sum_beyond_tolerance_fails() {
        let validator = LedgerValidator::default();
        let expense = expense_with_shares(10000, &[5000, 4000]);
        let err = validator.validate_expense(&expense).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_negative_amount_fails() {
        let validator = LedgerValidator::default();
        let expense = expense_with_shares(-10000, &[-5000, -5000]);
        assert!(validator.validate_expense(&expense).is_err());
    }

    #[test]
    fn test_negative_share_fails() {
        let validator = LedgerValidator::default();
        let expense = expense_with_shares(100, &[200, -100]);
        assert!(validator.validate_expense(&expense).is_err());
    }

    #[test]
    fn test_empty_splits_fails() {
        let validator = LedgerValidator::default();
        let expense = expense_with_shares(100, &[]);
        assert!(validator.validate_expense(&expense).is_err());
    }

    #[test]
    fn test_self_settlement_fails() {
        let validator = LedgerValidator::default();
        let settlement = Settlement::new(member("a"), member("a"), Decimal::new(100, 2));
        let err = validator.validate_settlement(&settlement).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_non_positive_settlement_fails() {
        let validator = LedgerValidator::default();
        let settlement = Settlement::new(member("a"), member("b"), Decimal::ZERO);
        assert!(validator.validate_settlement(&settlement).is_err());
    }

    #[test]
    fn test_validate_ledger_walks_all_records() {
        let validator = LedgerValidator::default();
        let mut ledger = GroupLedger::new(uuid::Uuid::now_v7());
        ledger.record_expense(expense_with_shares(10000, &[5000, 5000]));
        ledger.record_settlement(Settlement::new(member("a"), member("a"), Decimal::ONE));

        assert!(validator.validate_ledger(&ledger).is_err());
    }
}
