//! # bookdepth
//!
//! Order-book aggregation for the trading dashboard's book view: level
//! normalization, tick-bucket grouping, and cumulative depth statistics.
//!
//! ## Architecture
//!
//! The crate is a pure function pipeline, run once per incoming book
//! snapshot:
//!
//! 1. **Source** — [`DecodedBookSide`] normalizes either upstream decoding
//!    (spot or perpetual) into a flat best-first level sequence
//! 2. **Grouping** — [`group_levels`] merges levels into configurable tick
//!    buckets (exact `Decimal` arithmetic, side-dependent rounding)
//! 3. **Depth** — [`cumulative_side`] derives running totals, percentage
//!    stats, and user-order flags ready for direct display
//!
//! No I/O, no ambient state, no incremental path: every call recomputes its
//! output from the full input, so concurrent use needs no coordination.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookdepth::prelude::*;
//!
//! let raw = decoded.levels(DEFAULT_DEPTH);
//! let grouped = group_levels(&raw, Some(grouping), Some(tick_size), Side::Bid);
//! let display = cumulative_side(&grouped, &params);
//! ```
//!
//! [`DecodedBookSide`]: domain::book::DecodedBookSide
//! [`group_levels`]: domain::book::group_levels
//! [`cumulative_side`]: domain::book::cumulative_side

/// Shared newtypes and decimal helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, normalization, state.
pub mod domain;

/// Unified crate error types.
pub mod error;

pub mod prelude {
    // Shared types + helpers
    pub use crate::shared::{decimal_places, parse_decimal, round_pct, Side};

    // Book domain — levels + pipeline
    pub use crate::domain::book::{
        cumulative_side, group_levels, has_open_order_in_group, BookLevel, CumulativeLevel,
        DepthParams, DEFAULT_DEPTH,
    };

    // Book domain — decoder adapter + wire shapes
    pub use crate::domain::book::wire::{PerpBookSide, PerpL2Row, SpotBookSide, SpotL2Row};
    pub use crate::domain::book::DecodedBookSide;

    // State containers
    pub use crate::domain::book::{BookSideState, OrderbookState};

    // Errors
    pub use crate::error::BookError;
}
