//! Advanced filtering example for citydb-rs
//!
//! This example demonstrates composing predicates and folds

use citydb_rs::prelude::*;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    println!("=== CityDB-RS Advanced Filtering Example ===\n");

    let path = Dataset::default_data_dir().join(Dataset::default_dataset_filename());
    let cities = Dataset::load_from_path(path)?;

    // Example 1: Warm cities anywhere
    println!("--- Example 1: Cities above 15°C ---");
    let warm = select_where(
        |r| r.get_f64("temperature").is_some_and(|t| t > 15.0),
        &cities,
    );
    for city in &warm {
        println!("- {city}");
    }
    println!();

    // Example 2: Selections compose: filter the output of another filter
    println!("--- Example 2: Warm cities in Italy ---");
    let warm_italian = select_where(
        |r| r.get_str("country").is_some_and(|c| equals_normalized(c, "italy")),
        warm.iter().copied(),
    );
    for city in &warm_italian {
        println!("- {}", city.name().unwrap_or("?"));
    }
    println!();

    // Example 3: Average temperature per country
    println!("--- Example 3: Average temperature per country ---");
    let mut per_country: BTreeMap<String, Option<f64>> = BTreeMap::new();
    for country in cities.distinct_countries() {
        let members = cities.cities_in_country(&country);
        let avg = aggregate("temperature", folds::numeric_mean, members.iter().copied());
        per_country.insert(country, avg);
    }
    for (country, avg) in &per_country {
        match avg {
            Some(avg) => println!("{country:<12} {avg:>6.2}"),
            None => println!("{country:<12}    n/a"),
        }
    }
    println!();

    // Example 4: Values that are present but not numeric
    println!("--- Example 4: Unusable temperature values ---");
    let unusable = aggregate(
        "temperature",
        |xs| xs.into_iter().filter(|v| v.as_f64().is_none()).count(),
        &cities,
    );
    println!("{unusable} temperature values could not be read as numbers");
    println!();

    // Example 5: Accent-insensitive name search
    println!("--- Example 5: Cities matching 'lodz' ---");
    for city in cities.find_cities_by_substring("lodz") {
        println!("- {city}");
    }

    Ok(())
}
