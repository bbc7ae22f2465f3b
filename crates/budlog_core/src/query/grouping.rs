//! Grouping views over joined entries.
//!
//! # Responsibility
//! - Partition entries by local calendar day and by source store label.
//! - Summarize each store group (counts, distinct strains, most frequent).
//!
//! # Invariants
//! - Every input entry lands in exactly one group; none are dropped or
//!   duplicated.
//! - Day groups are ordered newest day first, sorted by date value.
//! - Store groups keep the first-seen order of their labels.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::join::JoinedEntry;
use crate::query::stats::most_frequent_strain;

/// Label substituted when an entry carries no store information.
pub const UNKNOWN_STORE: &str = "Unknown";

/// Entries of a single local calendar day, in original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    /// Renders as `yyyy-mm-dd` via `Display`.
    pub day: NaiveDate,
    pub entries: Vec<JoinedEntry>,
}

/// Partitions entries by local calendar day, newest day first.
///
/// Ordering is by parsed date value, so it stays correct across month and
/// year boundaries. Within a day, input order is preserved.
pub fn group_by_day(entries: &[JoinedEntry]) -> Vec<DayGroup> {
    let mut by_day: BTreeMap<NaiveDate, Vec<JoinedEntry>> = BTreeMap::new();
    for joined in entries {
        by_day
            .entry(joined.entry.local_day())
            .or_default()
            .push(joined.clone());
    }

    by_day
        .into_iter()
        .rev()
        .map(|(day, entries)| DayGroup { day, entries })
        .collect()
}

/// Summary of all entries sharing one source store label.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSummary {
    pub store: String,
    pub entry_count: usize,
    /// Number of distinct strain names in this group.
    pub distinct_strains: usize,
    /// Distinct strain names in first-seen order.
    pub strain_names: Vec<String>,
    /// Most frequently consumed strain; ties break first-seen.
    pub most_common_strain: Option<String>,
}

/// Partitions entries by source store label and summarizes each group.
///
/// Entries without a label fall under [`UNKNOWN_STORE`]. Groups appear in
/// the order their labels are first encountered.
pub fn group_by_store(entries: &[JoinedEntry]) -> Vec<StoreSummary> {
    let mut groups: Vec<(String, Vec<JoinedEntry>)> = Vec::new();
    for joined in entries {
        let label = joined
            .entry
            .store
            .as_deref()
            .unwrap_or(UNKNOWN_STORE)
            .to_string();
        match groups.iter_mut().find(|(store, _)| *store == label) {
            Some((_, members)) => members.push(joined.clone()),
            None => groups.push((label, vec![joined.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(store, members)| {
            let mut strain_names: Vec<String> = Vec::new();
            for joined in &members {
                if !strain_names.iter().any(|name| name == &joined.strain.name) {
                    strain_names.push(joined.strain.name.clone());
                }
            }
            StoreSummary {
                store,
                entry_count: members.len(),
                distinct_strains: strain_names.len(),
                most_common_strain: most_frequent_strain(&members),
                strain_names,
            }
        })
        .collect()
}
