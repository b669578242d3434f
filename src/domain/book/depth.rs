//! Cumulative depth statistics over a best-first level sequence.

use rust_decimal::Decimal;

use super::{BookLevel, CumulativeLevel, DepthParams};
use crate::shared::round_pct;

/// Whether one of the user's own resting orders matches a displayed level.
///
/// Un-grouped levels match on exact price equality. Grouped levels match on
/// containment in `[price − grouping, price + grouping]`: grouping may have
/// merged several raw price points under one displayed price, so the test
/// runs per resulting level with the increment as tolerance.
pub fn has_open_order_in_group(
    user_order_prices: &[Decimal],
    price: Decimal,
    grouping: Decimal,
    is_grouped: bool,
) -> bool {
    if !is_grouped {
        return user_order_prices.iter().any(|p| *p == price);
    }
    user_order_prices
        .iter()
        .any(|p| *p >= price - grouping && *p <= price + grouping)
}

/// Derive display-ready cumulative statistics for one side of the book.
///
/// Truncates to `params.depth` levels, then walks best-first accumulating a
/// running size; level *i*'s `cumulative_size` includes level *i* itself.
/// Percentages round half-up to whole numbers, with zero reference totals
/// substituted by 1 so the output degrades instead of dividing by zero.
///
/// Pure and deterministic: identical inputs produce identical output,
/// rounding included. Never fails; an empty input yields an empty output.
pub fn cumulative_side(levels: &[BookLevel], params: &DepthParams) -> Vec<CumulativeLevel> {
    let mut cumulative_size = Decimal::ZERO;
    levels
        .iter()
        .take(params.depth)
        .map(|level| {
            cumulative_size += level.size;
            CumulativeLevel {
                price: level.price,
                size: level.size,
                cumulative_size,
                size_percent: round_pct(cumulative_size, params.total_size),
                cumulative_size_percent: round_pct(level.size, cumulative_size),
                max_size_percent: round_pct(level.size, params.max_size),
                is_users_order: has_open_order_in_group(
                    &params.user_order_prices,
                    level.price,
                    params.grouping,
                    params.is_grouped,
                ),
            }
        })
        .collect()
}
