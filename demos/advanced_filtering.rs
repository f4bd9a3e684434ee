//! Advanced filtering example for graves-rs
//!
//! Combines criteria and shows how field aliases are resolved.

use graves_core::prelude::*;

fn main() -> Result<()> {
    println!("=== graves-rs Advanced Filtering Example ===\n");

    let db = GraveDb::load()?;

    // Example 1: Several criteria at once (AND)
    println!("--- Example 1: Last name 'nowak', died in the 1940s ---");
    let criteria = FilterCriteria::new()
        .with(LogicalField::LastName, "nowak")
        .with(LogicalField::DeathDate, "194");
    let hits = db.search_indices(&criteria);
    println!("Found {} graves:", hits.len());
    for i in hits {
        println!("- {}", GraveSummary::new(i, &db.graves()[i]));
    }
    println!();

    // Example 2: Which property key each death date came from
    println!("--- Example 2: Death date key variants in use ---");
    for alias in LogicalField::DeathDate.aliases() {
        let n = db
            .graves()
            .iter()
            .filter(|g| g.property(alias).is_some())
            .count();
        println!("{alias:>16}: {n}");
    }
    println!();

    // Example 3: Graves missing a searchable field
    println!("--- Example 3: Graves without a birth date ---");
    let missing = db
        .graves()
        .iter()
        .filter(|g| g.field(LogicalField::BirthDate).is_empty())
        .count();
    println!("{missing} of {} graves have no birth date", db.len());
    println!();

    // Example 4: Most common surnames
    println!("--- Example 4: Top 5 surnames ---");
    let mut counts = std::collections::BTreeMap::<String, usize>::new();
    for g in db.graves() {
        let last = g.field(LogicalField::LastName);
        if !last.is_empty() {
            *counts.entry(last).or_default() += 1;
        }
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    for (i, (name, n)) in counts.iter().take(5).enumerate() {
        println!("{}. {name} - {n}", i + 1);
    }

    Ok(())
}
