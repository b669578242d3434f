//! Normalization from decoded wire shapes into the flat level sequence the
//! aggregation pipeline consumes.
//!
//! The spot/perp distinction is resolved once here, as a tagged union; the
//! grouping and depth code downstream never branches on market kind.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wire::{PerpBookSide, SpotBookSide};
use super::{BookLevel, DEFAULT_DEPTH};
use crate::error::BookError;

/// One decoded side of either market kind's order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "market", rename_all = "lowercase")]
pub enum DecodedBookSide {
    Spot(SpotBookSide),
    Perp(PerpBookSide),
}

impl DecodedBookSide {
    /// Parse a decoded side from its JSON form (tagged with `"market"`).
    pub fn from_json(json: &str) -> Result<Self, BookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flatten this side into up to `depth` `(price, size)` levels,
    /// preserving the decoder's best-first order.
    ///
    /// Rows with a missing or negative price or size are dropped and do not
    /// count against `depth`; decoders emit partial rows while streaming and
    /// one bad entry must never abort the side.
    pub fn levels(&self, depth: usize) -> Vec<BookLevel> {
        let mut out = Vec::with_capacity(depth.min(self.len()));
        let rows: Box<dyn Iterator<Item = (Option<Decimal>, Option<Decimal>)> + '_> = match self {
            DecodedBookSide::Spot(side) => {
                Box::new(side.levels.iter().map(|r| (r.price, r.size)))
            }
            DecodedBookSide::Perp(side) => {
                Box::new(side.levels.iter().map(|r| (r.price, r.size)))
            }
        };

        for (price, size) in rows {
            if out.len() == depth {
                break;
            }
            match (price, size) {
                (Some(price), Some(size))
                    if price >= Decimal::ZERO && size >= Decimal::ZERO =>
                {
                    out.push(BookLevel::new(price, size));
                }
                (price, size) => {
                    tracing::warn!(?price, ?size, "dropping malformed book row");
                }
            }
        }
        out
    }

    /// Flatten with the book view's default depth.
    pub fn ui_levels(&self) -> Vec<BookLevel> {
        self.levels(DEFAULT_DEPTH)
    }

    /// Raw row count before normalization.
    pub fn len(&self) -> usize {
        match self {
            DecodedBookSide::Spot(side) => side.levels.len(),
            DecodedBookSide::Perp(side) => side.levels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
