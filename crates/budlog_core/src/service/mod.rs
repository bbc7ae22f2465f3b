//! Use-case services over the in-memory stores.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Enforce cross-store invariants that no single store can see.

pub mod tracker;
