//! Synthetic demo dataset.
//!
//! # Responsibility
//! - Build a small, realistic catalog and journal for demos and smoke runs.
//!
//! # Invariants
//! - The dataset is rebuilt from scratch on every call; nothing persists.
//! - Entry timestamps are relative to now so the dashboard windows always
//!   have data.

use chrono::{DateTime, Duration, Local};
use std::collections::BTreeSet;

use crate::model::entry::{ConsumptionMethod, Entry, MoodEffect, PhysicalEffect};
use crate::model::strain::{Strain, StrainKind};
use crate::service::tracker::TrackerService;
use crate::store::catalog::CatalogStore;
use crate::store::journal::JournalStore;

struct StrainSpec {
    name: &'static str,
    kind: StrainKind,
    thc: f64,
    cbd: f64,
    description: &'static str,
    favorite: bool,
}

const DEMO_STRAINS: &[StrainSpec] = &[
    StrainSpec {
        name: "Blue Dream",
        kind: StrainKind::Hybrid,
        thc: 18.0,
        cbd: 0.5,
        description: "A popular strain known for its balanced effects, combining the best of both sativa and indica.",
        favorite: true,
    },
    StrainSpec {
        name: "OG Kush",
        kind: StrainKind::Indica,
        thc: 23.0,
        cbd: 0.3,
        description: "A potent indica known for its powerful relaxation effects.",
        favorite: false,
    },
    StrainSpec {
        name: "Sour Diesel",
        kind: StrainKind::Sativa,
        thc: 20.0,
        cbd: 0.2,
        description: "An energizing sativa that provides a fast-acting boost.",
        favorite: true,
    },
    StrainSpec {
        name: "ACDC",
        kind: StrainKind::Cbd,
        thc: 1.0,
        cbd: 20.0,
        description: "A high-CBD strain known for medicinal benefits without significant psychoactive effects.",
        favorite: false,
    },
    StrainSpec {
        name: "Purple Punch",
        kind: StrainKind::Indica,
        thc: 19.0,
        cbd: 0.1,
        description: "A sweet, dessert-like strain with relaxing effects.",
        favorite: true,
    },
];

struct EntrySpec {
    strain_index: usize,
    days_ago: i64,
    amount: f64,
    unit: &'static str,
    method: ConsumptionMethod,
    mood_effects: &'static [MoodEffect],
    physical_effects: &'static [PhysicalEffect],
    rating: u8,
    notes: &'static str,
    store: Option<&'static str>,
}

const DEMO_ENTRIES: &[EntrySpec] = &[
    EntrySpec {
        strain_index: 0,
        days_ago: 0,
        amount: 0.5,
        unit: "g",
        method: ConsumptionMethod::Vape,
        mood_effects: &[MoodEffect::Relaxed, MoodEffect::Creative],
        physical_effects: &[PhysicalEffect::PainRelief],
        rating: 4,
        notes: "Great for evening relaxation, helped with back pain.",
        store: Some("Green Leaf Dispensary"),
    },
    EntrySpec {
        strain_index: 2,
        days_ago: 1,
        amount: 0.25,
        unit: "g",
        method: ConsumptionMethod::Smoke,
        mood_effects: &[MoodEffect::Energetic, MoodEffect::Focused],
        physical_effects: &[],
        rating: 5,
        notes: "Perfect for morning productivity.",
        store: Some("Green Leaf Dispensary"),
    },
    EntrySpec {
        strain_index: 1,
        days_ago: 2,
        amount: 10.0,
        unit: "mg",
        method: ConsumptionMethod::Edible,
        mood_effects: &[MoodEffect::Sleepy, MoodEffect::Relaxed],
        physical_effects: &[PhysicalEffect::SleepAid],
        rating: 3,
        notes: "Took too much, felt groggy the next morning.",
        store: Some("Herbal Corner"),
    },
    EntrySpec {
        strain_index: 3,
        days_ago: 3,
        amount: 0.5,
        unit: "ml",
        method: ConsumptionMethod::Tincture,
        mood_effects: &[],
        physical_effects: &[
            PhysicalEffect::InflammationRelief,
            PhysicalEffect::PainRelief,
        ],
        rating: 4,
        notes: "Great for daytime pain relief without psychoactive effects.",
        store: None,
    },
    EntrySpec {
        strain_index: 4,
        days_ago: 4,
        amount: 0.75,
        unit: "g",
        method: ConsumptionMethod::Vape,
        mood_effects: &[MoodEffect::Euphoric, MoodEffect::Relaxed],
        physical_effects: &[PhysicalEffect::Appetite],
        rating: 5,
        notes: "Perfect for weekend relaxation.",
        store: None,
    },
];

/// Builds the demo tracker with entry timestamps relative to now.
pub fn demo_service() -> TrackerService {
    demo_service_at(Local::now())
}

/// Builds a tracker pre-populated with the demo catalog and journal.
///
/// Entry timestamps are laid out backwards from `now`, so callers that
/// need deterministic day boundaries can pin the reference instant.
///
/// The demo data is well-formed by construction, so store insertion cannot
/// fail; a debug assertion guards that in development builds.
pub fn demo_service_at(now: DateTime<Local>) -> TrackerService {
    let mut catalog = CatalogStore::new();
    let mut strain_ids = Vec::with_capacity(DEMO_STRAINS.len());

    for spec in DEMO_STRAINS {
        let mut strain = Strain::new(spec.name, spec.kind);
        strain.thc_content = Some(spec.thc);
        strain.cbd_content = Some(spec.cbd);
        strain.description = Some(spec.description.to_string());
        strain.favorite = spec.favorite;
        let added = catalog.add_strain(strain);
        debug_assert!(added.is_ok());
        if let Ok(id) = added {
            strain_ids.push(id);
        }
    }

    let mut journal = JournalStore::new();

    // Specs are ordered newest-first; iterate in reverse so prepending
    // reproduces that order in the store.
    for spec in DEMO_ENTRIES.iter().rev() {
        let Some(&strain_id) = strain_ids.get(spec.strain_index) else {
            continue;
        };
        let mut entry = Entry::new(
            strain_id,
            now - Duration::days(spec.days_ago),
            spec.amount,
            spec.unit,
            spec.method,
            spec.rating,
        );
        entry.mood_effects = spec.mood_effects.iter().copied().collect::<BTreeSet<_>>();
        entry.physical_effects = spec
            .physical_effects
            .iter()
            .copied()
            .collect::<BTreeSet<_>>();
        entry.notes = Some(spec.notes.to_string());
        entry.store = spec.store.map(str::to_string);
        let added = journal.add_entry(entry);
        debug_assert!(added.is_ok());
    }

    TrackerService::from_stores(catalog, journal)
}
