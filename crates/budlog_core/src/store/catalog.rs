//! Strain catalog store.
//!
//! # Responsibility
//! - Own the strain collection and its mutation surface.
//! - Enforce strain validation before every write.
//!
//! # Invariants
//! - Strain ids are unique within the store.
//! - Insertion order is preserved; updates keep position.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::strain::{Strain, StrainId, StrainValidationError};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error for catalog store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Validation(StrainValidationError),
    NotFound(StrainId),
    /// A strain with this id already exists.
    DuplicateId(StrainId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "strain not found: {id}"),
            Self::DuplicateId(id) => write!(f, "strain id already in use: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<StrainValidationError> for CatalogError {
    fn from(value: StrainValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory store owning all known strains.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    strains: Vec<Strain>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a strain after validation.
    ///
    /// Returns the stable id of the stored strain.
    pub fn add_strain(&mut self, strain: Strain) -> CatalogResult<StrainId> {
        strain.validate()?;
        if self.get(strain.id).is_some() {
            return Err(CatalogError::DuplicateId(strain.id));
        }
        let id = strain.id;
        self.strains.push(strain);
        Ok(id)
    }

    /// Replaces an existing strain in place, keeping its position.
    pub fn update_strain(&mut self, strain: Strain) -> CatalogResult<()> {
        strain.validate()?;
        let slot = self
            .strains
            .iter_mut()
            .find(|existing| existing.id == strain.id)
            .ok_or(CatalogError::NotFound(strain.id))?;
        *slot = strain;
        Ok(())
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: StrainId) -> CatalogResult<bool> {
        let strain = self
            .strains
            .iter_mut()
            .find(|strain| strain.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        strain.favorite = !strain.favorite;
        Ok(strain.favorite)
    }

    /// Removes a strain and returns it.
    ///
    /// Referential policy (refusing removal while journal entries still
    /// point here) lives in the service layer, which sees both stores.
    pub fn remove_strain(&mut self, id: StrainId) -> CatalogResult<Strain> {
        let index = self
            .strains
            .iter()
            .position(|strain| strain.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        Ok(self.strains.remove(index))
    }

    pub fn get(&self, id: StrainId) -> Option<&Strain> {
        self.strains.iter().find(|strain| strain.id == id)
    }

    /// Snapshot of all strains in insertion order.
    pub fn strains(&self) -> &[Strain] {
        &self.strains
    }

    pub fn len(&self) -> usize {
        self.strains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strains.is_empty()
    }
}
