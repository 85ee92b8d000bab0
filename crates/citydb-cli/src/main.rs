//! citydb-cli — Command-line interface for citydb-core
//!
//! Loads a CSV file of cities and answers questions about it. Run without a
//! subcommand it prints the standard report: the average temperature, the
//! cities in Germany, the Spanish cities warmer than 12°C and the number of
//! distinct countries.
//!
//! Usage examples
//! --------------
//!
//! - Standard report from ./Cities.csv (or another default location)
//!   $ citydb
//!
//! - Same report from a specific (optionally gzipped) file, as JSON
//!   $ citydb --input data/Cities.csv.gz --json
//!
//! - Cities of one country, optionally above a temperature
//!   $ citydb country italy --above 14
//!
//! - Search cities by substring
//!   $ citydb cities zur
//!
//! Data source
//! -----------
//!
//! Without `--input`, the CLI probes `./Cities.csv`, `Cities.csv`,
//! `/content/Cities.csv` and `/mnt/data/Cities.csv` in that order. If none
//! exists it says so on stderr and exits successfully without output.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citydb_core::{CityQuery, Dataset, Record, Report};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let loaded = match &args.input {
        Some(path) => Dataset::load_from_path(path),
        None => Dataset::load(),
    };
    let dataset = match loaded {
        Ok(ds) => ds,
        Err(e) if e.is_unavailable() => {
            eprintln!("{e}");
            eprintln!("Put Cities.csv next to the program or pass --input <path>.");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to load the city dataset"),
    };

    if dataset.is_empty() {
        eprintln!("The dataset contains no records.");
        return Ok(());
    }

    let json = args.json;
    match args.command.unwrap_or(Commands::Report) {
        Commands::Report => {
            let report = Report::compute(&dataset);
            if json {
                print_json(&report)?;
            } else {
                println!("{report}");
            }
        }

        Commands::Stats => {
            let stats = dataset.stats();
            if json {
                print_json(&stats)?;
            } else {
                println!("Dataset statistics:");
                println!("  Records: {}", stats.records);
                println!("  Fields: {}", stats.fields);
                println!("  Countries: {}", stats.countries);
            }
        }

        Commands::Countries => {
            let countries = dataset.distinct_countries();
            if json {
                print_json(&countries)?;
            } else {
                for c in &countries {
                    println!("{c}");
                }
            }
        }

        Commands::Country { name, above } => {
            let matches = match above {
                Some(t) => dataset.cities_in_country_above(&name, t),
                None => dataset.cities_in_country(&name),
            };
            print_records(&matches, json, || format!("No cities found for: {name}"))?;
        }

        Commands::Cities { query } => {
            let matches = dataset.find_cities_by_substring(&query);
            print_records(&matches, json, || format!("No cities found matching: {query}"))?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    debug!("citydb started with verbosity level: {}", verbose);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_records(
    records: &[&Record],
    json: bool,
    empty_message: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(records);
    }
    if records.is_empty() {
        println!("{}", empty_message());
    } else {
        for r in records {
            println!("{r}");
        }
    }
    Ok(())
}
