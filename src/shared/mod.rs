//! Shared types and utilities used across the book domain.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format upstream decoders emit, so they can be used
//! directly in wire types without conversion overhead.

pub mod price;

pub use price::{decimal_places, parse_decimal, round_pct};

use serde::{Deserialize, Serialize};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order-book side: Bid (buy) or Ask (sell).
///
/// The side selects the bucket rounding direction during grouping: bids round
/// down (a bid is never overstated), asks round up (an ask is never
/// understated), so a grouped book can never appear crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub fn is_bid(&self) -> bool {
        matches!(self, Side::Bid)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}
