//! Property-based tests for ledger invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Split conservation: equal splits always sum back to the amount
//! - Deterministic remainder: leftover cents go to the earliest shares
//! - Constructed records always pass validation

use ledger_core::{money, Expense, LedgerValidator, MemberId, Settlement};
use proptest::prelude::*;
use rust_decimal::Decimal;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: equal-split shares always sum back to the amount
    #[test]
    fn prop_split_evenly_conserves(cents in 1i64..10_000_000, n in 1usize..=20) {
        let amount = Decimal::new(cents, 2);
        let shares = money::split_evenly(amount, n).unwrap();

        prop_assert_eq!(shares.len(), n);
        let total: Decimal = shares.iter().sum();
        prop_assert_eq!(total, amount);
    }

    /// Property: shares differ by at most one cent, larger shares first
    #[test]
    fn prop_split_remainder_is_deterministic(cents in 1i64..1_000_000, n in 1usize..=20) {
        let shares = money::split_evenly(Decimal::new(cents, 2), n).unwrap();

        let min = shares.iter().min().unwrap();
        let max = shares.iter().max().unwrap();
        prop_assert!(*max - *min <= Decimal::new(1, 2));

        let mut sorted = shares.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(shares, sorted);
    }

    /// Property: every equal-split expense passes validation
    #[test]
    fn prop_equal_split_expense_is_valid(cents in 1i64..1_000_000, n in 1usize..=8) {
        let participants: Vec<MemberId> = (0..n)
            .map(|i| MemberId::new(format!("m{}", i)))
            .collect();

        let expense = Expense::split_equally(
            MemberId::new("payer"),
            Decimal::new(cents, 2),
            &participants,
            "generated",
        )
        .unwrap();

        prop_assert!(LedgerValidator::default().validate_expense(&expense).is_ok());
    }

    /// Property: positive settlements between distinct members are valid
    #[test]
    fn prop_settlement_is_valid(cents in 1i64..1_000_000) {
        let settlement = Settlement::new(
            MemberId::new("a"),
            MemberId::new("b"),
            Decimal::new(cents, 2),
        );

        prop_assert!(LedgerValidator::default().validate_settlement(&settlement).is_ok());
    }
}
