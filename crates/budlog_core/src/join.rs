//! Denormalized read model joining entries with their strains.
//!
//! # Responsibility
//! - Resolve each entry's strain reference against a catalog snapshot.
//! - Surface unresolved references instead of fabricating strain data.
//!
//! # Invariants
//! - The join is recomputed on every call; it never caches strain copies,
//!   so later catalog mutations are visible on the next read.
//! - Journal order is preserved in the joined output.
//! - An entry whose reference does not resolve is excluded from the joined
//!   collection and reported, never silently replaced by a placeholder.

use log::warn;

use crate::model::entry::{Entry, EntryId};
use crate::model::strain::{Strain, StrainId};

/// An entry with its resolved strain embedded. Derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedEntry {
    pub entry: Entry,
    pub strain: Strain,
}

/// An entry whose strain reference did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrphanedEntry {
    pub entry_id: EntryId,
    pub strain_id: StrainId,
}

/// Result of joining a journal snapshot against a catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinOutcome {
    /// Successfully joined entries in journal order.
    pub joined: Vec<JoinedEntry>,
    /// Entries excluded because their strain reference is dangling.
    pub orphaned: Vec<OrphanedEntry>,
}

/// Joins every entry with its catalog strain.
///
/// Dangling references are an integrity defect: the offending entries are
/// reported in [`JoinOutcome::orphaned`] and logged, and never appear in
/// the joined collection.
pub fn join_entries(entries: &[Entry], strains: &[Strain]) -> JoinOutcome {
    let mut outcome = JoinOutcome::default();

    for entry in entries {
        match strains.iter().find(|strain| strain.id == entry.strain_id) {
            Some(strain) => outcome.joined.push(JoinedEntry {
                entry: entry.clone(),
                strain: strain.clone(),
            }),
            None => {
                warn!(
                    "event=orphaned_entry module=join status=error entry_id={} strain_id={}",
                    entry.id, entry.strain_id
                );
                outcome.orphaned.push(OrphanedEntry {
                    entry_id: entry.id,
                    strain_id: entry.strain_id,
                });
            }
        }
    }

    outcome
}
