//! Money helpers
//!
//! All amounts are `rust_decimal::Decimal` (exact arithmetic, never floats).
//! Ledger amounts are tracked at cent precision; these helpers centralize
//! the rounding rules so every call site divides and truncates the same way.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{Error, Result};

/// Cent precision for ledger amounts
pub const CENT_SCALE: u32 = 2;

/// Round to cent precision (midpoint rounds to nearest even)
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp(CENT_SCALE)
}

/// Truncate toward zero to cent precision
pub fn truncate_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::ToZero)
}

/// Split `amount` into `n` whole-cent shares.
///
/// Integer division leaves up to `n - 1` leftover cents; they go one each
/// to the first shares in order, so the result always sums back to
/// `amount` rounded to cents. Deterministic for a given participant order.
pub fn split_evenly(amount: Decimal, n: usize) -> Result<Vec<Decimal>> {
    if n == 0 {
        return Err(Error::Money(
            "cannot split among zero participants".to_string(),
        ));
    }

    if amount <= Decimal::ZERO {
        return Err(Error::Money(format!(
            "split amount must be positive: {}",
            amount
        )));
    }

    let cents = (round_to_cents(amount) * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| Error::Money(format!("amount out of range: {}", amount)))?;

    let n = n as i64;
    let base = cents / n;
    let leftover = cents % n;

    Ok((0..n)
        .map(|i| {
            let share = if i < leftover { base + 1 } else { base };
            Decimal::new(share, CENT_SCALE)
        })
        .collect())
}
