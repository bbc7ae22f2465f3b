//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `budlog_core` linkage.
//! - Print a demo dashboard so the derived views can be eyeballed quickly.

use budlog_core::{EntryFilter, TrackerService};
use chrono::Local;

fn main() {
    println!("budlog_core ping={}", budlog_core::ping());
    println!("budlog_core version={}", budlog_core::core_version());

    let tracker = TrackerService::with_demo_data();
    let summary = tracker.dashboard(Local::now());

    println!("entries_today={}", summary.entries_today);
    println!("entries_this_week={}", summary.entries_this_week);
    println!("average_rating={:.1}", summary.average_rating);
    println!("favorite_strains={}", summary.favorite_strains.join(", "));

    for group in tracker.history(&EntryFilter::default()) {
        println!("day={} entries={}", group.day, group.entries.len());
        for joined in &group.entries {
            println!(
                "  strain={} method={} rating={}",
                joined.strain.name,
                joined.entry.method.label(),
                joined.entry.rating
            );
        }
    }

    for store in tracker.store_overview("") {
        println!(
            "store={} purchases={} strains={} most_common={}",
            store.store,
            store.entry_count,
            store.distinct_strains,
            store.most_common_strain.as_deref().unwrap_or("-")
        );
    }
}
