//! Wire types for decoded book sides, as upstream decoders emit them.
//!
//! Two decoders feed the book view: the spot-market decoder (serum-style L2
//! rows that also carry an order count) and the perpetual-market decoder
//! (plain price/size rows). Both emit prices and sizes already converted to
//! human-readable units; lot scaling never reaches this crate.
//!
//! Fields are `Option` and default-tolerant on purpose: decoders can emit
//! partial rows mid-stream, and a half-built row must not poison the whole
//! payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One L2 row from the spot-market decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotL2Row {
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub size: Option<Decimal>,
    /// Distinct resting orders aggregated at this price. Display-only.
    #[serde(default)]
    pub num_orders: Option<u32>,
}

/// One L2 row from the perpetual-market decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerpL2Row {
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub size: Option<Decimal>,
}

/// One side of a decoded spot-market book, best price first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotBookSide {
    #[serde(default)]
    pub levels: Vec<SpotL2Row>,
}

/// One side of a decoded perpetual-market book, best price first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerpBookSide {
    #[serde(default)]
    pub levels: Vec<PerpL2Row>,
}
