//! Filtered views over joined entries, the strain catalog, and store
//! summaries.
//!
//! # Responsibility
//! - Apply the combined text/method/day filter to joined entries.
//! - Apply the catalog search and favorite partition to strains.
//! - Apply the store-name search to store summaries.
//!
//! # Invariants
//! - Each sub-predicate is vacuously true when its filter value is absent
//!   or blank; the all-empty filter is the identity on order and content.
//! - Text matching is case-insensitive substring matching.

use chrono::NaiveDate;

use crate::join::JoinedEntry;
use crate::model::entry::ConsumptionMethod;
use crate::model::strain::Strain;
use crate::query::grouping::StoreSummary;

/// Combined filter for the history view. `Default` passes everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    /// Matched against strain name and entry notes.
    pub text: String,
    pub method: Option<ConsumptionMethod>,
    /// Matched against the entry's local calendar day.
    pub day: Option<NaiveDate>,
}

impl EntryFilter {
    /// Whether the entry passes all three sub-predicates.
    pub fn matches(&self, joined: &JoinedEntry) -> bool {
        let query = self.text.trim().to_lowercase();
        let matches_text = query.is_empty()
            || joined.strain.name.to_lowercase().contains(&query)
            || joined
                .entry
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(&query));

        let matches_method = self
            .method
            .map_or(true, |method| joined.entry.method == method);

        let matches_day = self
            .day
            .map_or(true, |day| joined.entry.local_day() == day);

        matches_text && matches_method && matches_day
    }
}

/// Returns the entries passing `filter`, preserving input order.
pub fn filter_entries(entries: &[JoinedEntry], filter: &EntryFilter) -> Vec<JoinedEntry> {
    entries
        .iter()
        .filter(|joined| filter.matches(joined))
        .cloned()
        .collect()
}

/// Catalog search result partitioned by favorite flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrainShelf {
    /// Matching strains with `favorite = true`, in catalog order.
    pub favorites: Vec<Strain>,
    /// Remaining matches, in catalog order.
    pub others: Vec<Strain>,
}

/// Filters strains by name or kind label, then partitions by favorite.
///
/// A blank query matches every strain.
pub fn filter_strains(strains: &[Strain], query: &str) -> StrainShelf {
    let query = query.trim().to_lowercase();
    let mut shelf = StrainShelf::default();

    for strain in strains {
        let matches = query.is_empty()
            || strain.name.to_lowercase().contains(&query)
            || strain.kind.label().to_lowercase().contains(&query);
        if !matches {
            continue;
        }
        if strain.favorite {
            shelf.favorites.push(strain.clone());
        } else {
            shelf.others.push(strain.clone());
        }
    }

    shelf
}

/// Filters store summaries by store name, preserving input order.
///
/// A blank query matches every store.
pub fn filter_stores(stores: &[StoreSummary], query: &str) -> Vec<StoreSummary> {
    let query = query.trim().to_lowercase();
    stores
        .iter()
        .filter(|summary| query.is_empty() || summary.store.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
