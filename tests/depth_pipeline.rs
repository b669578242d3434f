//! End-to-end pipeline: decoded payload → normalize → group → cumulative.

use bookdepth::prelude::*;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn spot_bid_side_through_full_pipeline() {
    let decoded = DecodedBookSide::from_json(
        r#"{
            "market": "spot",
            "levels": [
                {"price": "100", "size": "5", "num_orders": 2},
                {"price": "99.5", "size": "3"},
                {"size": "7"},
                {"price": "99", "size": "2", "num_orders": 1}
            ]
        }"#,
    )
    .unwrap();

    let raw = decoded.levels(DEFAULT_DEPTH);
    assert_eq!(raw.len(), 3); // malformed row dropped

    let grouped = group_levels(&raw, Some(dec("1")), Some(dec("0.1")), Side::Bid);
    assert_eq!(
        grouped,
        vec![
            BookLevel::new(dec("100"), dec("5")),
            BookLevel::new(dec("99"), dec("5")),
        ]
    );

    let total: Decimal = grouped.iter().map(|l| l.size).sum();
    let params = DepthParams {
        total_size: total,
        max_size: dec("5"),
        user_order_prices: vec![dec("99.4")],
        grouping: dec("1"),
        is_grouped: true,
        ..DepthParams::default()
    };
    let display = cumulative_side(&grouped, &params);

    assert_eq!(display.len(), 2);
    assert_eq!(display[0].cumulative_size, dec("5"));
    assert_eq!(display[0].size_percent, 50);
    assert_eq!(display[1].cumulative_size, dec("10"));
    assert_eq!(display[1].size_percent, 100);
    // 99.4 sits inside both buckets' tolerance windows
    assert!(display[0].is_users_order);
    assert!(display[1].is_users_order);
    // grouping conserved size
    assert_eq!(display.last().unwrap().cumulative_size, total);
}

#[test]
fn perp_ask_side_through_state_container() {
    let decoded = DecodedBookSide::from_json(
        r#"{
            "market": "perp",
            "levels": [
                {"price": "100.1", "size": "2"},
                {"price": "100.4", "size": "1"}
            ]
        }"#,
    )
    .unwrap();

    let mut book = OrderbookState::new();
    book.asks.apply_snapshot(&decoded.levels(DEFAULT_DEPTH));
    book.bids
        .apply_snapshot(&[BookLevel::new(dec("99.8"), dec("4"))]);

    assert_eq!(book.best_ask(), Some(dec("100.1")));
    assert_eq!(book.spread(), Some(dec("0.3")));

    let grouped = group_levels(
        &book.asks.levels(DEFAULT_DEPTH),
        Some(dec("0.5")),
        Some(dec("0.1")),
        Side::Ask,
    );
    assert_eq!(grouped, vec![BookLevel::new(dec("100.5"), dec("3"))]);

    let params = DepthParams {
        total_size: book.asks.total_size(),
        max_size: book.max_level_size(),
        ..DepthParams::default()
    };
    let display = cumulative_side(&grouped, &params);
    assert_eq!(display[0].size_percent, 100);
    assert_eq!(display[0].max_size_percent, 75); // 3 of max level 4
    assert!(!display[0].is_users_order);
}
