//! Consumption journal store.
//!
//! # Responsibility
//! - Own the entry collection and its mutation surface.
//! - Enforce entry validation before every write.
//!
//! # Invariants
//! - Entries are kept newest-first: adds prepend, updates keep position.
//! - Entry ids are unique within the store.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::entry::{Entry, EntryId, EntryValidationError};
use crate::model::strain::StrainId;

pub type JournalResult<T> = Result<T, JournalError>;

/// Error for journal store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalError {
    Validation(EntryValidationError),
    NotFound(EntryId),
    /// An entry with this id already exists.
    DuplicateId(EntryId),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::DuplicateId(id) => write!(f, "entry id already in use: {id}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<EntryValidationError> for JournalError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory store owning all logged consumption entries, newest first.
#[derive(Debug, Clone, Default)]
pub struct JournalStore {
    entries: Vec<Entry>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry after validation, prepending it to the collection.
    pub fn add_entry(&mut self, entry: Entry) -> JournalResult<EntryId> {
        entry.validate()?;
        if self.get(entry.id).is_some() {
            return Err(JournalError::DuplicateId(entry.id));
        }
        let id = entry.id;
        self.entries.insert(0, entry);
        Ok(id)
    }

    /// Replaces an existing entry in place, keeping its position.
    pub fn update_entry(&mut self, entry: Entry) -> JournalResult<()> {
        entry.validate()?;
        let slot = self
            .entries
            .iter_mut()
            .find(|existing| existing.id == entry.id)
            .ok_or(JournalError::NotFound(entry.id))?;
        *slot = entry;
        Ok(())
    }

    /// Removes an entry and returns it.
    pub fn remove_entry(&mut self, id: EntryId) -> JournalResult<Entry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(JournalError::NotFound(id))?;
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Snapshot of all entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries referencing the given strain.
    ///
    /// Drives the refuse-removal-while-referenced policy upstream.
    pub fn references(&self, strain_id: StrainId) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strain_id == strain_id)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
