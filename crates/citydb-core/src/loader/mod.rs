// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Finds the city CSV, handles the physical layer (I/O, optional gzip) and
//! turns rows into normalized [`Record`]s:
//!
//! - header names are trimmed and lowercased,
//! - text values are trimmed,
//! - rows shorter than the header get [`Value::Null`] for the missing fields,
//! - fields beyond the header are dropped.

use crate::error::{CityDbError, Result};
use crate::model::{Dataset, Record, Value};
use crate::text::normalize_key;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

mod common_io;

pub use common_io::{is_gzip, open_stream};

/// Locations probed by [`Dataset::load`], in order.
pub const DEFAULT_CANDIDATES: [&str; 4] = [
    "./Cities.csv",
    "Cities.csv",
    "/content/Cities.csv",
    "/mnt/data/Cities.csv",
];

pub fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// Returns the first candidate that exists on disk.
pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .inspect(|p| trace!(path = %p.display(), "probing dataset candidate"))
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

impl Dataset {
    /// Directory holding the sample dataset shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "Cities.csv"
    }

    /// Loads the first of [`DEFAULT_CANDIDATES`] that exists.
    ///
    /// Fails with [`CityDbError::Unavailable`] when none of them do.
    pub fn load() -> Result<Self> {
        Self::load_from_candidates(&default_candidates())
    }

    pub fn load_from_candidates<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        match locate(candidates) {
            Some(path) => Self::load_from_path(path),
            None => {
                let candidates: Vec<PathBuf> =
                    candidates.iter().map(|p| p.as_ref().to_path_buf()).collect();
                warn!(count = candidates.len(), "no dataset found in any candidate location");
                Err(CityDbError::Unavailable { candidates })
            }
        }
    }

    /// Loads one specific file. `.gz` files are decompressed when the
    /// `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dataset");
        let reader = open_stream(path)?;
        let dataset = Self::from_reader(reader)?;
        debug!(records = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Parses comma-separated text with a header row from any reader.
    ///
    /// ```rust
    /// use citydb_core::Dataset;
    ///
    /// let csv = " City , Country \n Berlin , Germany \n";
    /// let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(ds.records()[0].get_str("country"), Some("Germany"));
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let names: Vec<String> = rdr.headers()?.iter().map(normalize_key).collect();

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            if row.len() > names.len() {
                trace!(
                    line = row.position().map(|p| p.line()),
                    extra = row.len() - names.len(),
                    "dropping fields beyond the header"
                );
            }
            let mut record = Record::with_capacity(names.len());
            for (i, name) in names.iter().enumerate() {
                let value = row
                    .get(i)
                    .map_or(Value::Null, |v| Value::Text(v.trim().to_string()));
                record.insert(name.as_str(), value);
            }
            records.push(record);
        }

        Ok(Dataset::new(records))
    }
}
