//! Error handling example for graves-rs
//!
//! This example demonstrates load failures and out-of-range lookups

use graves_core::prelude::*;

fn main() -> Result<()> {
    println!("=== graves-rs Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match GraveDb::load_from_path("Data/does-not-exist.geojson") {
        Ok(db) => println!("  Unexpectedly loaded {} graves", db.len()),
        Err(e) => println!("  ✗ {e} (dataset error: {})", e.is_dataset_error()),
    }
    println!();

    // Example 2: Wrong GeoJSON type
    println!("--- Example 2: Document that is not a FeatureCollection ---");
    match GraveDb::from_json_str(r#"{"type":"Point","coordinates":[21.0,52.2]}"#) {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let db = GraveDb::load()?;

    // Example 3: Positions outside the store
    println!("--- Example 3: Out-of-range positions ---");
    for id in [-1, db.len() as i64, db.len() as i64 + 10] {
        match db.grave(id) {
            Ok(_) => println!("  Found grave {id}"),
            Err(e) => println!("  Not found: {e}"),
        }
    }
    println!();

    // Example 4: Filtering never fails
    println!("--- Example 4: Odd search input ---");
    for frag in ["", "   ", "Ż", "┼Ť", "%"] {
        let n = db.find_by_field(LogicalField::LastName, frag).len();
        println!("  {frag:?} -> {n} graves");
    }

    Ok(())
}
