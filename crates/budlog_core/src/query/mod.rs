//! Aggregation and query layer.
//!
//! # Responsibility
//! - Derive statistics, groupings, and filtered views from joined entries.
//! - Keep every operation a pure function over a snapshot.
//!
//! # Invariants
//! - No operation mutates its input or holds hidden state; calling any
//!   operation twice on the same snapshot yields the same result.
//! - An empty result is a normal value, never an error.

pub mod filter;
pub mod grouping;
pub mod stats;
