// crates/citydb-core/src/common.rs
use serde::Serialize;

/// Simple aggregate statistics for a dataset.
///
/// Returned by [`CityQuery::stats`](crate::CityQuery::stats). `fields` counts
/// distinct field names across all records, so sparse records still
/// contribute every column they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DbStats {
    pub records: usize,
    pub fields: usize,
    pub countries: usize,
}
