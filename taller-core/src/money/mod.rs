//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary values are stored/serialized as `f64` rounded to 2 decimal
//! places; every calculation goes through `Decimal` so balances reconcile
//! exactly. Validation at the boundary keeps NaN/Infinity out of the math.

use rust_decimal::prelude::*;
use shared::{DomainError, DomainResult};
use shared::models::Payment;

/// Rounding precision for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed order total / payment amount
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated at the boundary. If NaN/Infinity
/// somehow reaches here, logs an error and returns ZERO to avoid silent
/// corruption of balances.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs bounded by MAX_AMOUNT
        // is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Pending balance: max(0, total_cost - advance), never negative
pub fn compute_balance(total_cost: f64, advance: f64) -> f64 {
    let balance = (to_decimal(total_cost) - to_decimal(advance)).max(Decimal::ZERO);
    to_f64(balance)
}

/// Validate the (total_cost, advance) pair of an order
///
/// Fails with `InvalidAdvance` when total_cost is not strictly positive,
/// advance is negative, advance exceeds total_cost, or either operand is
/// non-finite.
pub fn validate_advance(total_cost: f64, advance: f64) -> DomainResult<()> {
    if !total_cost.is_finite() || !advance.is_finite() {
        return Err(DomainError::InvalidAdvance {
            total_cost,
            advance,
        });
    }
    if total_cost <= 0.0 || total_cost > MAX_AMOUNT {
        return Err(DomainError::InvalidAdvance {
            total_cost,
            advance,
        });
    }
    if advance < 0.0 || to_decimal(advance) > to_decimal(total_cost) {
        return Err(DomainError::InvalidAdvance {
            total_cost,
            advance,
        });
    }
    Ok(())
}

/// Validate a payment amount (finite, positive, bounded)
pub fn validate_amount(amount: f64) -> DomainResult<()> {
    if !amount.is_finite() || amount <= 0.0 || amount > MAX_AMOUNT {
        return Err(DomainError::InvalidAmount(amount));
    }
    Ok(())
}

/// Sum payment amounts with precise arithmetic
pub fn sum_payments(payments: &[Payment]) -> f64 {
    let total: Decimal = payments.iter().map(|p| to_decimal(p.amount)).sum();
    to_f64(total)
}

/// Compare two monetary values for equality at 2-decimal precision
pub fn money_eq(a: f64, b: f64) -> bool {
    to_f64(to_decimal(a)) == to_f64(to_decimal(b))
}
