//! Book state containers — app-owned, crate-provided update logic.
//!
//! The dashboard holds one decoded side per market in its store and re-runs
//! the grouping pipeline on every update. These containers cover the pure
//! part of that: applying snapshot/delta rows and emitting the best-first
//! level sequence the pipeline consumes. Store wiring stays with the app.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::{BookLevel, DEFAULT_DEPTH};
use crate::shared::Side;

/// Live state for one side of a book.
#[derive(Debug, Clone)]
pub struct BookSideState {
    side: Side,
    levels: BTreeMap<Decimal, Decimal>,
}

impl BookSideState {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Replace all levels with a fresh snapshot.
    pub fn apply_snapshot(&mut self, rows: &[BookLevel]) {
        self.levels.clear();
        self.apply(rows);
    }

    /// Merge delta rows: zero size removes a level, otherwise it is upserted.
    pub fn apply(&mut self, rows: &[BookLevel]) {
        for row in rows {
            if row.size.is_zero() {
                self.levels.remove(&row.price);
            } else {
                self.levels.insert(row.price, row.size);
            }
        }
    }

    /// Best price on this side: highest bid or lowest ask.
    pub fn best_price(&self) -> Option<Decimal> {
        if self.side.is_bid() {
            self.levels.keys().next_back().copied()
        } else {
            self.levels.keys().next().copied()
        }
    }

    /// Up to `depth` levels, best price first.
    pub fn levels(&self, depth: usize) -> Vec<BookLevel> {
        let to_level = |(&price, &size)| BookLevel::new(price, size);
        if self.side.is_bid() {
            self.levels.iter().rev().take(depth).map(to_level).collect()
        } else {
            self.levels.iter().take(depth).map(to_level).collect()
        }
    }

    /// Sum of all resting size on this side.
    pub fn total_size(&self) -> Decimal {
        self.levels.values().copied().sum()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

/// Both sides of one market's book.
#[derive(Debug, Clone)]
pub struct OrderbookState {
    pub bids: BookSideState,
    pub asks: BookSideState,
}

impl OrderbookState {
    pub fn new() -> Self {
        Self {
            bids: BookSideState::new(Side::Bid),
            asks: BookSideState::new(Side::Ask),
        }
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.best_price()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.best_price()
    }

    /// Mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }

    /// Spread between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Largest single level size across both sides within `DEFAULT_DEPTH`.
    ///
    /// The book view uses this as the `max_size` reference so depth bars on
    /// both sides share one scale.
    pub fn max_level_size(&self) -> Decimal {
        self.bids
            .levels(DEFAULT_DEPTH)
            .iter()
            .chain(self.asks.levels(DEFAULT_DEPTH).iter())
            .map(|l| l.size)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }
}

impl Default for OrderbookState {
    fn default() -> Self {
        Self::new()
    }
}
