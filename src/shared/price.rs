//! Pure decimal helpers for the book pipeline.
//!
//! All price math uses `rust_decimal::Decimal` for exact arithmetic — bucket
//! rounding must be reproducible bit-for-bit across regroupings, which rules
//! out native floating point. Percentages are the one place integer rounding
//! happens, and it is half-up (midpoint away from zero), matching the
//! rendering layer's expectations.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

use crate::error::BookError;

/// Parse a decimal from its string form.
pub fn parse_decimal(input: &str) -> Result<Decimal, BookError> {
    Decimal::from_str(input).map_err(|e| BookError::InvalidDecimal {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Number of fraction digits a value carries, ignoring trailing zeros.
///
/// Used to rescale bucket prices to the precision implied by a grouping
/// increment (`0.5` → 1, `1` → 0, `0.010` → 2).
pub fn decimal_places(value: &Decimal) -> u32 {
    value.normalize().scale()
}

/// `numerator / denominator` as a whole percentage, rounded half-up.
///
/// A zero denominator is substituted with 1 rather than treated as an error:
/// reference totals can legitimately be zero on an empty or one-sided book,
/// and the percentage fields must degrade instead of raising.
pub fn round_pct(numerator: Decimal, denominator: Decimal) -> u32 {
    let denominator = if denominator.is_zero() {
        Decimal::ONE
    } else {
        denominator
    };
    (numerator / denominator * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
