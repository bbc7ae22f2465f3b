use budlog_core::{
    ConsumptionMethod, Entry, EntryValidationError, JournalError, JournalStore,
};
use chrono::{Duration, Local};
use uuid::Uuid;

fn entry(rating: u8) -> Entry {
    Entry::new(
        Uuid::new_v4(),
        Local::now(),
        0.5,
        "g",
        ConsumptionMethod::Vape,
        rating,
    )
}

#[test]
fn add_prepends_newest_first() {
    let mut journal = JournalStore::new();
    let older = entry(3);
    let newer = entry(4);
    journal.add_entry(older.clone()).unwrap();
    journal.add_entry(newer.clone()).unwrap();

    let ids: Vec<_> = journal.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[test]
fn add_rejects_invalid_entries_and_leaves_store_unchanged() {
    let mut journal = JournalStore::new();

    let mut bad_amount = entry(4);
    bad_amount.amount = -1.0;
    assert_eq!(
        journal.add_entry(bad_amount).unwrap_err(),
        JournalError::Validation(EntryValidationError::AmountNotPositive(-1.0))
    );

    let bad_rating = entry(6);
    assert_eq!(
        journal.add_entry(bad_rating).unwrap_err(),
        JournalError::Validation(EntryValidationError::RatingOutOfRange(6))
    );

    let mut bad_unit = entry(4);
    bad_unit.unit = String::new();
    assert_eq!(
        journal.add_entry(bad_unit).unwrap_err(),
        JournalError::Validation(EntryValidationError::BlankUnit)
    );

    assert!(journal.is_empty());
}

#[test]
fn update_keeps_position() {
    let mut journal = JournalStore::new();
    let first = entry(3);
    let second = entry(4);
    journal.add_entry(first.clone()).unwrap();
    journal.add_entry(second.clone()).unwrap();

    let mut updated = first.clone();
    updated.rating = 5;
    updated.notes = Some("better than remembered".to_string());
    journal.update_entry(updated).unwrap();

    // `first` was added first, so it sits at the back.
    assert_eq!(journal.entries()[1].id, first.id);
    assert_eq!(journal.entries()[1].rating, 5);
    assert_eq!(journal.entries()[0].id, second.id);
}

#[test]
fn update_unknown_entry_returns_not_found() {
    let mut journal = JournalStore::new();
    let ghost = entry(4);
    assert_eq!(
        journal.update_entry(ghost.clone()).unwrap_err(),
        JournalError::NotFound(ghost.id)
    );
}

#[test]
fn remove_returns_the_entry() {
    let mut journal = JournalStore::new();
    let target = entry(4);
    journal.add_entry(target.clone()).unwrap();

    let removed = journal.remove_entry(target.id).unwrap();
    assert_eq!(removed.id, target.id);
    assert!(journal.is_empty());
    assert_eq!(
        journal.remove_entry(target.id).unwrap_err(),
        JournalError::NotFound(target.id)
    );
}

#[test]
fn references_counts_entries_per_strain() {
    let mut journal = JournalStore::new();
    let strain_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    for days_ago in 0..3 {
        let mut tracked = Entry::new(
            strain_id,
            Local::now() - Duration::days(days_ago),
            0.5,
            "g",
            ConsumptionMethod::Smoke,
            4,
        );
        tracked.notes = Some(format!("day -{days_ago}"));
        journal.add_entry(tracked).unwrap();
    }
    journal
        .add_entry(Entry::new(
            other_id,
            Local::now(),
            1.0,
            "g",
            ConsumptionMethod::Vape,
            3,
        ))
        .unwrap();

    assert_eq!(journal.references(strain_id), 3);
    assert_eq!(journal.references(other_id), 1);
    assert_eq!(journal.references(Uuid::new_v4()), 0);
}
