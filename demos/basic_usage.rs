//! Basic usage example for graves-rs
//!
//! This example demonstrates how to:
//! - Load the grave dataset
//! - Look up graves by position
//! - Search by name and date fragments
//! - Use the process-wide cache

use graves_core::prelude::*;

fn main() -> Result<()> {
    println!("=== graves-rs Basic Usage Example ===\n");

    // Load the dataset (Data/mogily.geojson, cached for the process)
    println!("Loading grave dataset...");
    let db = GraveDb::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: First few graves
    println!("--- Example 1: List graves ---");
    let graves = db.graves();
    println!("Total graves: {}", graves.len());
    for (i, grave) in graves.iter().enumerate().take(5) {
        println!("{}", GraveSummary::new(i, grave));
    }
    println!();

    // Example 2: Positional lookup
    println!("--- Example 2: Grave by position ---");
    match db.grave(0) {
        Ok(grave) => {
            println!("Found: {}", GraveSummary::new(0, grave).full_name());
            println!("Download as: {}", download_filename(grave));
        }
        Err(e) => println!("{e}"),
    }
    println!();

    // Example 3: Search by last name
    println!("--- Example 3: Last name contains 'kow' ---");
    for i in db.search_indices(&FilterCriteria::new().with(LogicalField::LastName, "kow")) {
        println!("{}", GraveSummary::new(i, &graves[i]));
    }
    println!();

    // Example 4: Using the cache
    println!("--- Example 4: Cache usage ---");
    let start = std::time::Instant::now();
    let again = GraveDb::load()?;
    println!("Second load: {:?} (same store: {})", start.elapsed(), std::sync::Arc::ptr_eq(&db, &again));
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Dataset statistics ---");
    let stats = db.stats();
    println!("Graves: {}", stats.graves);
    println!("With death date: {}", stats.with_death_date);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
