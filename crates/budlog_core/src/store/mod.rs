//! In-memory stores owning the catalog and journal collections.
//!
//! # Responsibility
//! - Provide validated CRUD over the two owned collections.
//! - Hand out snapshot slices for the read-side query layer.
//!
//! # Invariants
//! - Write paths call the model's `validate()` before any mutation.
//! - A failed write leaves store state unchanged.
//! - Stores never resolve cross-store references; that is service work.

pub mod catalog;
pub mod journal;
