//! Book domain — price levels, tick-bucket grouping, cumulative depth stats.
//!
//! The pipeline a book view runs on every incoming snapshot:
//!
//! ```text
//! DecodedBookSide::levels(depth)      normalize either decoder shape
//!   → group_levels(...)              merge levels into tick buckets
//!   → cumulative_side(...)           running depth + percentage stats
//! ```
//!
//! Everything here is pure and recomputed from scratch per snapshot; nothing
//! is mutated in place between invocations.

pub mod depth;
pub mod group;
pub mod source;
pub mod state;
pub mod wire;

pub use depth::{cumulative_side, has_open_order_in_group};
pub use group::group_levels;
pub use source::DecodedBookSide;
pub use state::{BookSideState, OrderbookState};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of levels the book view materializes by default.
///
/// Bounds both computation and rendering cost on deep books; levels past the
/// cutoff are dropped, not folded into the last visible bucket.
pub const DEFAULT_DEPTH: usize = 300;

/// A single order-book entry: one price point and its aggregate resting size.
///
/// Raw levels arrive best-price-first from an upstream decoder (price
/// descending for bids, ascending for asks). Both fields are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Decimal,
    pub size: Decimal,
}

impl BookLevel {
    pub fn new(price: Decimal, size: Decimal) -> Self {
        Self { price, size }
    }
}

/// A derived, display-ready level with running depth statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeLevel {
    /// Bucket representative price (floor for bids, ceiling for asks).
    pub price: Decimal,
    /// Total size aggregated into this bucket.
    pub size: Decimal,
    /// Running sum of `size` from the best price outward, inclusive.
    pub cumulative_size: Decimal,
    /// `cumulative_size` as a whole percentage of the side's total size.
    pub size_percent: u32,
    /// This level's `size` as a percentage of its own `cumulative_size` —
    /// the level's share of depth-so-far, not a running percent-of-total.
    /// The name is historical; kept as-is pending product review.
    pub cumulative_size_percent: u32,
    /// This level's `size` as a percentage of the reference max size.
    /// Drives depth-bar widths in the rendering layer.
    pub max_size_percent: u32,
    /// Whether one of the caller's own resting orders falls in this bucket.
    pub is_users_order: bool,
}

/// Parameters for [`cumulative_side`].
#[derive(Debug, Clone)]
pub struct DepthParams {
    /// Reference total (typically the sum of all sizes on this side) used to
    /// scale `size_percent`.
    pub total_size: Decimal,
    /// Reference max (typically the largest single level on either side)
    /// used to scale `max_size_percent`.
    pub max_size: Decimal,
    /// Maximum number of levels to materialize.
    pub depth: usize,
    /// Prices of the caller's own resting orders on this side.
    pub user_order_prices: Vec<Decimal>,
    /// Grouping increment currently applied; defines the `is_users_order`
    /// membership tolerance when `is_grouped` is set.
    pub grouping: Decimal,
    /// Whether `levels` went through [`group_levels`] with a real increment.
    pub is_grouped: bool,
}

impl Default for DepthParams {
    fn default() -> Self {
        Self {
            total_size: Decimal::ZERO,
            max_size: Decimal::ZERO,
            depth: DEFAULT_DEPTH,
            user_order_prices: Vec::new(),
            grouping: Decimal::ZERO,
            is_grouped: false,
        }
    }
}
