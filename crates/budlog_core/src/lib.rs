//! Core domain logic for Budlog, a personal consumption tracker.
//! This crate is the single source of truth for business invariants.
//!
//! State lives in two in-memory stores (catalog and journal); every view
//! is derived on read by pure functions over joined snapshots.

pub mod join;
pub mod logging;
pub mod model;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

pub use join::{join_entries, JoinOutcome, JoinedEntry, OrphanedEntry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{
    ConsumptionMethod, Entry, EntryId, EntryValidationError, MoodEffect, PhysicalEffect,
    RATING_RANGE,
};
pub use model::strain::{Strain, StrainId, StrainKind, StrainValidationError};
pub use query::filter::{filter_entries, filter_stores, filter_strains, EntryFilter, StrainShelf};
pub use query::grouping::{group_by_day, group_by_store, DayGroup, StoreSummary, UNKNOWN_STORE};
pub use query::stats::{
    average_rating, count_in_window, favorite_strain_names, most_frequent_strain, TimeWindow,
};
pub use service::tracker::{DashboardSummary, TrackerError, TrackerResult, TrackerService};
pub use store::catalog::{CatalogError, CatalogResult, CatalogStore};
pub use store::journal::{JournalError, JournalResult, JournalStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
