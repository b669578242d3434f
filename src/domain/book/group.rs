//! Tick-bucket grouping: merge adjacent price levels into coarser increments.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::BookLevel;
use crate::shared::{decimal_places, Side};

/// Merge `raw` levels into buckets of width `grouping`.
///
/// Bids bucket to `floor(price / grouping) * grouping`, asks to
/// `ceil(price / grouping) * grouping` — a bid is pulled down and an ask
/// pushed up, so grouping can never make the book look crossed. Sizes at the
/// same bucket add; total size is conserved.
///
/// Returns the input unchanged when `grouping` is absent, non-positive, or
/// equal to the market's native tick size (grouping at the native tick is a
/// no-op by definition). Bucket prices are rescaled to the fraction digits
/// of the increment, and the result is best-first: bids descending, asks
/// ascending.
///
/// All bucket arithmetic is exact `Decimal` math; the same input and
/// increment always reproduce the same buckets bit-for-bit.
pub fn group_levels(
    raw: &[BookLevel],
    grouping: Option<Decimal>,
    native_tick_size: Option<Decimal>,
    side: Side,
) -> Vec<BookLevel> {
    let grouping = match grouping {
        Some(g) if g > Decimal::ZERO => g,
        _ => {
            tracing::debug!("no grouping increment, passing levels through");
            return raw.to_vec();
        }
    };
    if native_tick_size == Some(grouping) {
        tracing::debug!(%grouping, "grouping equals native tick size, passing through");
        return raw.to_vec();
    }

    let scale = decimal_places(&grouping);
    let mut buckets: BTreeMap<Decimal, Decimal> = BTreeMap::new();
    for level in raw {
        let steps = level.price / grouping;
        let mut bucket = if side.is_bid() {
            steps.floor() * grouping
        } else {
            steps.ceil() * grouping
        };
        // Exact multiple of the increment, so this only strips excess scale.
        bucket.rescale(scale);
        *buckets.entry(bucket).or_insert(Decimal::ZERO) += level.size;
    }

    let to_level = |(price, size)| BookLevel::new(price, size);
    if side.is_bid() {
        buckets.into_iter().rev().map(to_level).collect()
    } else {
        buckets.into_iter().map(to_level).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn levels(rows: &[(&str, &str)]) -> Vec<BookLevel> {
        rows.iter()
            .map(|(p, s)| BookLevel::new(dec(p), dec(s)))
            .collect()
    }

    #[test]
    fn test_bids_floor_into_buckets() {
        let raw = levels(&[("100", "5"), ("99.5", "3"), ("99", "2")]);
        let grouped = group_levels(&raw, Some(dec("1")), Some(dec("0.1")), Side::Bid);
        assert_eq!(grouped, levels(&[("100", "5"), ("99", "5")]));
    }

    #[test]
    fn test_asks_ceil_into_buckets() {
        let raw = levels(&[("100.1", "2"), ("100.4", "1")]);
        let grouped = group_levels(&raw, Some(dec("0.5")), Some(dec("0.1")), Side::Ask);
        assert_eq!(grouped, levels(&[("100.5", "3")]));
    }

    #[test]
    fn test_grouping_conserves_total_size() {
        let raw = levels(&[("101.3", "4"), ("101.1", "2"), ("100.7", "7"), ("99.9", "1")]);
        for side in [Side::Bid, Side::Ask] {
            let grouped = group_levels(&raw, Some(dec("0.5")), None, side);
            let total_in: Decimal = raw.iter().map(|l| l.size).sum();
            let total_out: Decimal = grouped.iter().map(|l| l.size).sum();
            assert_eq!(total_in, total_out);
        }
    }

    #[test]
    fn test_rounding_direction_invariant() {
        let raw = levels(&[("101.3", "4"), ("101.1", "2"), ("100.7", "7")]);
        let bids = group_levels(&raw, Some(dec("0.5")), None, Side::Bid);
        for bucket in &bids {
            assert!(raw
                .iter()
                .filter(|l| {
                    // raw prices that landed in this bucket
                    (l.price / dec("0.5")).floor() * dec("0.5") == bucket.price
                })
                .all(|l| bucket.price <= l.price));
        }
        let asks = group_levels(&raw, Some(dec("0.5")), None, Side::Ask);
        for bucket in &asks {
            assert!(raw
                .iter()
                .filter(|l| (l.price / dec("0.5")).ceil() * dec("0.5") == bucket.price)
                .all(|l| bucket.price >= l.price));
        }
    }

    #[test]
    fn test_native_tick_is_pass_through() {
        let raw = levels(&[("100.1", "2"), ("100.4", "1")]);
        let grouped = group_levels(&raw, Some(dec("0.1")), Some(dec("0.1")), Side::Ask);
        assert_eq!(grouped, raw);
    }

    #[test]
    fn test_missing_or_zero_increment_is_pass_through() {
        let raw = levels(&[("100.4", "1"), ("100.1", "2")]);
        assert_eq!(group_levels(&raw, None, None, Side::Bid), raw);
        assert_eq!(
            group_levels(&raw, Some(Decimal::ZERO), None, Side::Bid),
            raw
        );
    }

    #[test]
    fn test_best_bucket_first_regardless_of_discovery_order() {
        // Bucket 99 is discovered before bucket 100; sort must still put the
        // best bid first.
        let raw = levels(&[("99.2", "1"), ("100.7", "2"), ("99.8", "3")]);
        let grouped = group_levels(&raw, Some(dec("1")), None, Side::Bid);
        assert_eq!(grouped, levels(&[("100", "2"), ("99", "4")]));
    }

    #[test]
    fn test_bucket_price_precision_matches_increment() {
        let raw = levels(&[("100.07", "2")]);
        let grouped = group_levels(&raw, Some(dec("0.5")), None, Side::Bid);
        assert_eq!(grouped[0].price.scale(), 1);
        assert_eq!(grouped[0].price, dec("100.0"));
    }

    #[test]
    fn test_regrouping_is_deterministic() {
        let raw = levels(&[("101.3", "4"), ("100.7", "7"), ("99.9", "1")]);
        let a = group_levels(&raw, Some(dec("0.3")), None, Side::Ask);
        let b = group_levels(&raw, Some(dec("0.3")), None, Side::Ask);
        assert_eq!(a, b);
    }
}
