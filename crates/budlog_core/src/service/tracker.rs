//! Tracker use-case service.
//!
//! # Responsibility
//! - Own the catalog and journal stores behind one write boundary.
//! - Validate cross-store references before any journal write.
//! - Compose the query layer into the views the UI renders.
//!
//! # Invariants
//! - An entry is never accepted while its strain reference is unresolved.
//! - A strain is never removed while journal entries still reference it.
//! - Read views are derived from fresh snapshots on every call.

use chrono::{DateTime, Local};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::join::{join_entries, JoinOutcome, JoinedEntry};
use crate::model::entry::{Entry, EntryId};
use crate::model::strain::{Strain, StrainId};
use crate::query::filter::{filter_entries, filter_stores, filter_strains, EntryFilter, StrainShelf};
use crate::query::grouping::{group_by_day, group_by_store, DayGroup, StoreSummary};
use crate::query::stats::{average_rating, count_in_window, favorite_strain_names, TimeWindow};
use crate::seed;
use crate::store::catalog::{CatalogError, CatalogStore};
use crate::store::journal::{JournalError, JournalStore};

/// Number of favorite names shown on the dashboard.
const DASHBOARD_FAVORITE_LIMIT: usize = 3;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors from tracker service operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerError {
    Catalog(CatalogError),
    Journal(JournalError),
    /// Entry write referenced a strain missing from the catalog.
    UnknownStrain(StrainId),
    /// Strain removal refused while journal entries still reference it.
    StrainInUse {
        strain_id: StrainId,
        entry_count: usize,
    },
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Journal(err) => write!(f, "{err}"),
            Self::UnknownStrain(id) => write!(f, "entry references unknown strain: {id}"),
            Self::StrainInUse {
                strain_id,
                entry_count,
            } => write!(
                f,
                "strain {strain_id} is still referenced by {entry_count} entries"
            ),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Journal(err) => Some(err),
            Self::UnknownStrain(_) | Self::StrainInUse { .. } => None,
        }
    }
}

impl From<CatalogError> for TrackerError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<JournalError> for TrackerError {
    fn from(value: JournalError) -> Self {
        Self::Journal(value)
    }
}

/// Headline numbers for the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub entries_today: usize,
    pub entries_this_week: usize,
    /// Mean rating rounded to one decimal; `0.0` when the journal is empty.
    pub average_rating: f64,
    /// Up to three favorite strain names in first-consumed order.
    pub favorite_strains: Vec<String>,
}

/// Single write boundary over the catalog and journal stores.
#[derive(Debug, Clone, Default)]
pub struct TrackerService {
    catalog: CatalogStore,
    journal: JournalStore,
}

impl TrackerService {
    /// Creates a tracker with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker pre-populated with the demo dataset.
    pub fn with_demo_data() -> Self {
        seed::demo_service()
    }

    /// Creates the demo tracker with timestamps anchored at `now`.
    ///
    /// Keeps day-boundary behavior deterministic for callers that pass
    /// the same instant to the dashboard and history views.
    pub fn with_demo_data_at(now: DateTime<Local>) -> Self {
        seed::demo_service_at(now)
    }

    pub(crate) fn from_stores(catalog: CatalogStore, journal: JournalStore) -> Self {
        Self { catalog, journal }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn journal(&self) -> &JournalStore {
        &self.journal
    }

    /// Adds a strain to the catalog.
    pub fn add_strain(&mut self, strain: Strain) -> TrackerResult<StrainId> {
        let id = self.catalog.add_strain(strain)?;
        info!("event=strain_added module=tracker status=ok strain_id={id}");
        Ok(id)
    }

    /// Replaces an existing strain in place.
    pub fn update_strain(&mut self, strain: Strain) -> TrackerResult<()> {
        self.catalog.update_strain(strain)?;
        Ok(())
    }

    /// Flips a strain's favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: StrainId) -> TrackerResult<bool> {
        Ok(self.catalog.toggle_favorite(id)?)
    }

    /// Removes a strain, refusing while journal entries reference it.
    pub fn remove_strain(&mut self, id: StrainId) -> TrackerResult<Strain> {
        let entry_count = self.journal.references(id);
        if entry_count > 0 {
            return Err(TrackerError::StrainInUse {
                strain_id: id,
                entry_count,
            });
        }
        Ok(self.catalog.remove_strain(id)?)
    }

    /// Adds a journal entry.
    ///
    /// The strain reference must resolve in the current catalog; the
    /// journal store checks amount, rating, and unit. On any failure both
    /// stores are left unchanged.
    pub fn add_entry(&mut self, entry: Entry) -> TrackerResult<EntryId> {
        self.require_strain(entry.strain_id)?;
        let id = self.journal.add_entry(entry)?;
        info!("event=entry_added module=tracker status=ok entry_id={id}");
        Ok(id)
    }

    /// Replaces an existing journal entry in place.
    pub fn update_entry(&mut self, entry: Entry) -> TrackerResult<()> {
        self.require_strain(entry.strain_id)?;
        self.journal.update_entry(entry)?;
        Ok(())
    }

    /// Removes a journal entry and returns it.
    pub fn remove_entry(&mut self, id: EntryId) -> TrackerResult<Entry> {
        Ok(self.journal.remove_entry(id)?)
    }

    fn require_strain(&self, id: StrainId) -> TrackerResult<()> {
        if self.catalog.get(id).is_none() {
            return Err(TrackerError::UnknownStrain(id));
        }
        Ok(())
    }

    /// Joins the current journal against the current catalog.
    ///
    /// Recomputed on every call so catalog mutations are always visible.
    pub fn joined_entries(&self) -> JoinOutcome {
        join_entries(self.journal.entries(), self.catalog.strains())
    }

    /// Headline numbers for the dashboard, relative to `now`.
    pub fn dashboard(&self, now: DateTime<Local>) -> DashboardSummary {
        let joined = self.joined_entries().joined;
        DashboardSummary {
            entries_today: count_in_window(&joined, now, TimeWindow::Today),
            entries_this_week: count_in_window(&joined, now, TimeWindow::PastWeek),
            average_rating: average_rating(&joined),
            favorite_strains: favorite_strain_names(&joined, DASHBOARD_FAVORITE_LIMIT),
        }
    }

    /// The most recent entries, newest first.
    pub fn recent_entries(&self, limit: usize) -> Vec<JoinedEntry> {
        let mut joined = self.joined_entries().joined;
        joined.truncate(limit);
        joined
    }

    /// Filtered history grouped by day, newest day first.
    pub fn history(&self, filter: &EntryFilter) -> Vec<DayGroup> {
        let joined = self.joined_entries().joined;
        group_by_day(&filter_entries(&joined, filter))
    }

    /// Per-store purchase summaries in first-seen order.
    ///
    /// `query` narrows the result by store name; blank keeps every store.
    pub fn store_overview(&self, query: &str) -> Vec<StoreSummary> {
        filter_stores(&group_by_store(&self.joined_entries().joined), query)
    }

    /// Catalog search partitioned into favorites and the rest.
    pub fn strain_shelf(&self, query: &str) -> StrainShelf {
        filter_strains(self.catalog.strains(), query)
    }
}
