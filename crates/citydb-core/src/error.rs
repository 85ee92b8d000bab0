// crates/citydb-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading a city dataset.
///
/// The query operations themselves never produce a `CityDbError`; failures of
/// caller-supplied predicates and folds travel through the `try_*` variants
/// with the caller's own error type.
#[derive(Debug, Error)]
pub enum CityDbError {
    /// An explicitly requested dataset path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// None of the candidate locations holds a dataset.
    #[error("Dataset unavailable: none of {} candidate paths exist ({})", .candidates.len(), display_paths(.candidates))]
    Unavailable { candidates: Vec<PathBuf> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CityDbError {
    /// True for the "no dataset anywhere" condition, which callers usually
    /// report and then stop without treating it as a failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CityDbError::Unavailable { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, CityDbError>;
