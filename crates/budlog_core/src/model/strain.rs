//! Strain catalog model.
//!
//! # Responsibility
//! - Define the catalog record describing a consumable product.
//! - Validate potency and naming constraints on every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another strain.
//! - Potency attributes, when present, are finite and non-negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a catalog strain.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StrainId = Uuid;

/// Category of a strain, with an explicit fallback for unclassified entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrainKind {
    Indica,
    Sativa,
    Hybrid,
    Cbd,
    Unknown,
}

impl StrainKind {
    /// Display label as shown to users and matched by catalog search.
    pub fn label(self) -> &'static str {
        match self {
            Self::Indica => "Indica",
            Self::Sativa => "Sativa",
            Self::Hybrid => "Hybrid",
            Self::Cbd => "CBD",
            Self::Unknown => "Unknown",
        }
    }
}

/// Catalog record for a consumable product and its potency attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strain {
    /// Stable global ID used for journal references.
    pub id: StrainId,
    pub name: String,
    pub kind: StrainKind,
    /// THC percentage. Optional because labels often omit it.
    pub thc_content: Option<f64>,
    /// CBD percentage.
    pub cbd_content: Option<f64>,
    pub description: Option<String>,
    pub favorite: bool,
}

/// Field-level validation failure for a strain write.
#[derive(Debug, Clone, PartialEq)]
pub enum StrainValidationError {
    /// Name is empty after trimming.
    BlankName,
    /// A potency attribute is negative or not a finite number.
    NegativePotency { field: &'static str, value: f64 },
}

impl Display for StrainValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "strain name must not be blank"),
            Self::NegativePotency { field, value } => {
                write!(f, "strain {field} must be a non-negative number, got {value}")
            }
        }
    }
}

impl Error for StrainValidationError {}

impl Strain {
    /// Creates a strain with a generated stable ID.
    ///
    /// Optional fields start empty and `favorite` starts `false`.
    pub fn new(name: impl Into<String>, kind: StrainKind) -> Self {
        Self::with_id(Uuid::new_v4(), name, kind)
    }

    /// Creates a strain with a caller-provided stable ID.
    ///
    /// Used by seed data and tests where identity is fixed up front.
    pub fn with_id(id: StrainId, name: impl Into<String>, kind: StrainKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            thc_content: None,
            cbd_content: None,
            description: None,
            favorite: false,
        }
    }

    /// Checks write-boundary constraints.
    ///
    /// # Errors
    /// - `BlankName` when the name trims to nothing.
    /// - `NegativePotency` when a potency attribute is set but negative or
    ///   non-finite.
    pub fn validate(&self) -> Result<(), StrainValidationError> {
        if self.name.trim().is_empty() {
            return Err(StrainValidationError::BlankName);
        }
        for (field, value) in [
            ("thc_content", self.thc_content),
            ("cbd_content", self.cbd_content),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(StrainValidationError::NegativePotency { field, value });
                }
            }
        }
        Ok(())
    }
}
