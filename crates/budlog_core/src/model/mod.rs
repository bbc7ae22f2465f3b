//! Domain model for the consumption tracker.
//!
//! # Responsibility
//! - Define the canonical catalog (strain) and journal (entry) records.
//! - Keep field-level validation next to the data it guards.
//!
//! # Invariants
//! - Every record is identified by a stable uuid that is never reused.
//! - Entries reference strains by id only; they never own strain data.

pub mod entry;
pub mod strain;
