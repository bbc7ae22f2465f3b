//! Consumption journal model.
//!
//! # Responsibility
//! - Define a single logged consumption event and its enumerations.
//! - Validate amount/rating/unit constraints on every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `strain_id` is a non-owning reference; resolution against the catalog
//!   is checked one layer up, where both stores are visible.
//! - Effect collections have set semantics: no duplicates, order irrelevant.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::model::strain::StrainId;

/// Stable identifier for a journal entry.
pub type EntryId = Uuid;

/// How the product was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionMethod {
    Smoke,
    Vape,
    Edible,
    Tincture,
    Topical,
    Other,
}

impl ConsumptionMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Smoke => "Smoke",
            Self::Vape => "Vape",
            Self::Edible => "Edible",
            Self::Tincture => "Tincture",
            Self::Topical => "Topical",
            Self::Other => "Other",
        }
    }

    /// Unit labels that make sense for this method.
    ///
    /// The unit field itself stays free text; this list drives input
    /// suggestions, not validation.
    pub fn unit_options(self) -> &'static [&'static str] {
        match self {
            Self::Edible => &["mg", "pieces"],
            Self::Tincture => &["ml", "drops"],
            Self::Topical => &["applications"],
            Self::Smoke | Self::Vape | Self::Other => &["g", "puffs", "bowls"],
        }
    }
}

/// Mood-side effect tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodEffect {
    Relaxed,
    Euphoric,
    Happy,
    Uplifted,
    Creative,
    Focused,
    Energetic,
    Sleepy,
}

/// Physical-side effect tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalEffect {
    PainRelief,
    InflammationRelief,
    Appetite,
    SleepAid,
    NauseaRelief,
    HeadacheRelief,
}

/// Valid rating range, inclusive on both ends.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A single logged consumption event referencing one catalog strain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable global ID.
    pub id: EntryId,
    /// Moment of consumption in the user's local timezone.
    pub consumed_at: DateTime<Local>,
    /// Reference to the consumed strain. Must resolve in the catalog.
    pub strain_id: StrainId,
    /// Consumed quantity, interpreted against `unit`.
    pub amount: f64,
    /// Free-text unit label, see [`ConsumptionMethod::unit_options`].
    pub unit: String,
    pub method: ConsumptionMethod,
    pub mood_effects: BTreeSet<MoodEffect>,
    pub physical_effects: BTreeSet<PhysicalEffect>,
    /// Star rating in `[1, 5]`.
    pub rating: u8,
    pub notes: Option<String>,
    /// Free-text label of where the product was obtained.
    pub store: Option<String>,
}

/// Field-level validation failure for an entry write.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    /// Amount is zero, negative, or not a finite number.
    AmountNotPositive(f64),
    /// Rating outside `[1, 5]`.
    RatingOutOfRange(u8),
    /// Unit label is empty after trimming.
    BlankUnit,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmountNotPositive(value) => {
                write!(f, "entry amount must be a positive number, got {value}")
            }
            Self::RatingOutOfRange(value) => write!(
                f,
                "entry rating must be between {} and {}, got {value}",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            ),
            Self::BlankUnit => write!(f, "entry unit must not be blank"),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Creates an entry with a generated stable ID.
    ///
    /// Effect sets start empty; `notes` and `store` start `None`.
    pub fn new(
        strain_id: StrainId,
        consumed_at: DateTime<Local>,
        amount: f64,
        unit: impl Into<String>,
        method: ConsumptionMethod,
        rating: u8,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), strain_id, consumed_at, amount, unit, method, rating)
    }

    /// Creates an entry with a caller-provided stable ID.
    pub fn with_id(
        id: EntryId,
        strain_id: StrainId,
        consumed_at: DateTime<Local>,
        amount: f64,
        unit: impl Into<String>,
        method: ConsumptionMethod,
        rating: u8,
    ) -> Self {
        Self {
            id,
            consumed_at,
            strain_id,
            amount,
            unit: unit.into(),
            method,
            mood_effects: BTreeSet::new(),
            physical_effects: BTreeSet::new(),
            rating,
            notes: None,
            store: None,
        }
    }

    /// The entry's calendar day in its local timezone.
    ///
    /// Day keys derived from this render as `yyyy-mm-dd`.
    pub fn local_day(&self) -> NaiveDate {
        self.consumed_at.date_naive()
    }

    /// Checks write-boundary constraints local to the entry.
    ///
    /// # Errors
    /// - `AmountNotPositive` when `amount` is not a finite positive number.
    /// - `RatingOutOfRange` when `rating` is outside `[1, 5]`.
    /// - `BlankUnit` when the unit label trims to nothing.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(EntryValidationError::AmountNotPositive(self.amount));
        }
        if !RATING_RANGE.contains(&self.rating) {
            return Err(EntryValidationError::RatingOutOfRange(self.rating));
        }
        if self.unit.trim().is_empty() {
            return Err(EntryValidationError::BlankUnit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsumptionMethod, Entry, EntryValidationError, MoodEffect};
    use chrono::Local;
    use uuid::Uuid;

    fn sample_entry() -> Entry {
        Entry::new(
            Uuid::new_v4(),
            Local::now(),
            0.5,
            "g",
            ConsumptionMethod::Vape,
            4,
        )
    }

    #[test]
    fn validate_accepts_well_formed_entry() {
        assert!(sample_entry().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        let mut entry = sample_entry();
        entry.amount = 0.0;
        assert_eq!(
            entry.validate(),
            Err(EntryValidationError::AmountNotPositive(0.0))
        );
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let mut entry = sample_entry();
        entry.rating = 0;
        assert_eq!(entry.validate(), Err(EntryValidationError::RatingOutOfRange(0)));
        entry.rating = 6;
        assert_eq!(entry.validate(), Err(EntryValidationError::RatingOutOfRange(6)));
    }

    #[test]
    fn validate_rejects_blank_unit() {
        let mut entry = sample_entry();
        entry.unit = "  ".to_string();
        assert_eq!(entry.validate(), Err(EntryValidationError::BlankUnit));
    }

    #[test]
    fn mood_effects_keep_set_semantics() {
        let mut entry = sample_entry();
        entry.mood_effects.insert(MoodEffect::Relaxed);
        entry.mood_effects.insert(MoodEffect::Relaxed);
        assert_eq!(entry.mood_effects.len(), 1);
    }

    #[test]
    fn unit_options_follow_method() {
        assert_eq!(ConsumptionMethod::Edible.unit_options(), &["mg", "pieces"]);
        assert!(ConsumptionMethod::Smoke.unit_options().contains(&"g"));
    }

    #[test]
    fn method_labels_are_stable() {
        assert_eq!(ConsumptionMethod::Vape.label(), "Vape");
        assert_eq!(ConsumptionMethod::Tincture.label(), "Tincture");
    }
}
