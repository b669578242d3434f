//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching upstream decoder output
//! - `source.rs` — Normalization from wire shapes into domain types
//! - `state.rs` — State containers with update methods (for feed-driven data)

pub mod book;
