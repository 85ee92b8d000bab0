//! Error handling example for citydb-rs
//!
//! This example demonstrates how load failures and caller errors surface

use citydb_rs::prelude::*;
use std::fmt;

#[derive(Debug)]
struct BadTemperature(String);

impl fmt::Display for BadTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "temperature {:?} is not a number", self.0)
    }
}

fn main() -> Result<()> {
    println!("=== CityDB-RS Error Handling Example ===\n");

    // Example 1: No candidate location exists
    println!("--- Example 1: Probing locations that do not exist ---");
    match Dataset::load_from_candidates(&["/nonexistent/Cities.csv", "missing.csv"]) {
        Ok(ds) => println!("  Unexpectedly loaded {} records", ds.len()),
        Err(e) if e.is_unavailable() => println!("  ✓ Reported: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: An explicit path that does not exist
    println!("--- Example 2: Loading an explicit missing path ---");
    match Dataset::load_from_path("/nonexistent/Cities.csv") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let path = Dataset::default_data_dir().join(Dataset::default_dataset_filename());
    let cities = Dataset::load_from_path(path)?;

    // Example 3: Dirty values are skipped by numeric folds
    println!("--- Example 3: Dirty temperatures are ignored ---");
    println!("  Average: {:?}", cities.average_temperature());
    println!();

    // Example 4: A strict predicate's error reaches the caller unchanged
    println!("--- Example 4: Strict predicate ---");
    let strict = try_select_where(
        |r| match r.get("temperature") {
            Some(v) => v
                .as_f64()
                .map(|t| t > 12.0)
                .ok_or_else(|| BadTemperature(v.to_string())),
            None => Ok(false),
        },
        &cities,
    );
    match strict {
        Ok(rows) => println!("  {} warm cities", rows.len()),
        Err(e) => println!("  ✗ Stopped: {e}"),
    }
    println!();

    // Example 5: A strict fold's error reaches the caller unchanged
    println!("--- Example 5: Strict fold ---");
    let total: std::result::Result<f64, BadTemperature> = try_aggregate(
        "temperature",
        |xs| {
            xs.into_iter()
                .map(|v| v.as_f64().ok_or_else(|| BadTemperature(v.to_string())))
                .sum()
        },
        &cities,
    );
    match total {
        Ok(sum) => println!("  Sum: {sum}"),
        Err(e) => println!("  ✗ Stopped: {e}"),
    }

    Ok(())
}
