//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset
//! - Produce the standard report
//! - Use `select_where` and `aggregate` directly

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Basic Usage Example ===\n");

    // Load the sample dataset shipped with citydb-core
    println!("Loading city dataset...");
    let path = Dataset::default_data_dir().join(Dataset::default_dataset_filename());
    let cities = Dataset::load_from_path(&path)?;
    println!("✓ Loaded {} records from {}\n", cities.len(), path.display());

    // Example 1: The standard report
    println!("--- Example 1: Standard report ---");
    println!("{}\n", Report::compute(&cities));

    // Example 2: Average temperature with aggregate
    println!("--- Example 2: Average temperature via aggregate ---");
    match aggregate("temperature", folds::numeric_mean, &cities) {
        Some(avg) => println!("Average: {avg:.2}"),
        None => println!("No usable temperatures"),
    }
    println!();

    // Example 3: Cities in Germany via select_where
    println!("--- Example 3: Cities in Germany via select_where ---");
    let german = select_where(
        |r| r.get_str("country").is_some_and(|c| equals_normalized(c, "germany")),
        &cities,
    );
    for city in &german {
        println!("- {}", city.name().unwrap_or("?"));
    }
    println!();

    // Example 4: Count of records carrying a temperature column
    println!("--- Example 4: Records with a temperature field ---");
    let n = aggregate("temperature", folds::count, &cities);
    println!("{n} of {} records have a temperature field", cities.len());

    Ok(())
}
