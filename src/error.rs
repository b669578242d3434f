//! Unified crate error types.

use thiserror::Error;

/// Top-level crate error.
///
/// The aggregation operations never fail — streaming book data is inherently
/// racy and the view must always have something to render — so errors only
/// arise at the parsing edge of the crate.
#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid decimal '{input}': {reason}")]
    InvalidDecimal { input: String, reason: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
