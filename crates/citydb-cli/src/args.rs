use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for citydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "Answer simple questions about a CSV file of cities"
)]
pub struct CliArgs {
    /// Path to the input CSV (or .csv.gz). Without it the default locations
    /// (./Cities.csv, /content/Cities.csv, /mnt/data/Cities.csv) are probed.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Average temperature, German cities, warm Spanish cities, country count (default)
    Report,

    /// Show a summary of the dataset contents
    Stats,

    /// List the distinct countries
    Countries,

    /// List the cities of one country
    Country {
        /// Country name (case-insensitive)
        name: String,

        /// Only cities with a temperature strictly above this value
        #[arg(long = "above", allow_negative_numbers = true)]
        above: Option<f64>,
    },

    /// Search for cities containing a substring
    Cities {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },
}
