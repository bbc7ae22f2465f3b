//! Statistics over joined entries.
//!
//! # Responsibility
//! - Compute time-windowed counts, average rating, favorite-name
//!   extraction, and most-frequent-strain selection.
//!
//! # Invariants
//! - All functions are total over well-formed input; the empty collection
//!   yields zero/empty values, not errors.
//! - Most-frequent selection ties break to the first name seen in entry
//!   order, never alphabetically.

use chrono::{DateTime, Local};

use crate::join::JoinedEntry;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Time window for entry counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Same local calendar day as the reference instant.
    Today,
    /// Rolling window: ceiling of elapsed days is at most 7, so an entry
    /// exactly 7.0 days old still counts.
    PastWeek,
}

/// Counts entries falling inside the window relative to `now`.
pub fn count_in_window(entries: &[JoinedEntry], now: DateTime<Local>, window: TimeWindow) -> usize {
    entries
        .iter()
        .filter(|joined| match window {
            TimeWindow::Today => joined.entry.local_day() == now.date_naive(),
            TimeWindow::PastWeek => elapsed_days_ceil(now, joined.entry.consumed_at) <= 7,
        })
        .count()
}

// Ceiling of |now - then| in whole days; any fractional day rounds up.
fn elapsed_days_ceil(now: DateTime<Local>, then: DateTime<Local>) -> i64 {
    let millis = (now - then).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Arithmetic mean of entry ratings, rounded to one decimal place.
///
/// The empty collection yields `0.0` rather than an error.
pub fn average_rating(entries: &[JoinedEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u32 = entries.iter().map(|joined| u32::from(joined.entry.rating)).sum();
    let mean = f64::from(sum) / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Names of favorite strains appearing in the entries.
///
/// Deduplicated preserving first-seen order, truncated to `limit`.
pub fn favorite_strain_names(entries: &[JoinedEntry], limit: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for joined in entries {
        if names.len() == limit {
            break;
        }
        if !joined.strain.favorite {
            continue;
        }
        if !names.iter().any(|name| name == &joined.strain.name) {
            names.push(joined.strain.name.clone());
        }
    }
    names
}

/// The most frequently consumed strain name, if any entries exist.
///
/// Counts are accumulated in first-seen order and ties break to the first
/// name to reach the maximum, so the result is deterministic.
pub fn most_frequent_strain(entries: &[JoinedEntry]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for joined in entries {
        let name = joined.strain.name.as_str();
        match counts.iter_mut().find(|(seen, _)| *seen == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        match best {
            // Strictly greater keeps the earlier name on ties.
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((name, count)),
        }
    }
    best.map(|(name, _)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::{elapsed_days_ceil, most_frequent_strain};
    use crate::join::JoinedEntry;
    use crate::model::entry::{ConsumptionMethod, Entry};
    use crate::model::strain::{Strain, StrainKind};
    use chrono::{Duration, Local, TimeZone};

    fn joined(name: &str) -> JoinedEntry {
        let strain = Strain::new(name, StrainKind::Hybrid);
        let entry = Entry::new(
            strain.id,
            Local::now(),
            0.5,
            "g",
            ConsumptionMethod::Vape,
            4,
        );
        JoinedEntry { entry, strain }
    }

    #[test]
    fn elapsed_days_round_up_on_any_fraction() {
        let now = Local.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(elapsed_days_ceil(now, now), 0);
        assert_eq!(elapsed_days_ceil(now, now - Duration::hours(1)), 1);
        assert_eq!(elapsed_days_ceil(now, now - Duration::days(7)), 7);
        assert_eq!(
            elapsed_days_ceil(now, now - Duration::days(7) - Duration::seconds(1)),
            8
        );
    }

    #[test]
    fn most_frequent_tie_breaks_to_first_seen() {
        // Two names with equal counts; the one seen first must win.
        let entries = vec![joined("Second"), joined("First"), joined("Second"), joined("First")];
        // "Second" appears first in iteration order.
        assert_eq!(most_frequent_strain(&entries), Some("Second".to_string()));
    }

    #[test]
    fn most_frequent_of_empty_is_none() {
        assert_eq!(most_frequent_strain(&[]), None);
    }
}
