// crates/citydb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::Record;
use std::collections::BTreeSet;

/// City-level questions answered on top of [`select_where`](crate::select_where)
/// and [`aggregate`](crate::aggregate).
///
/// Country comparisons trim and lowercase both sides, so `" Spain"` and
/// `"spain"` are the same country. Temperatures that do not read as numbers
/// are treated as missing.
pub trait CityQuery {
    fn stats(&self) -> DbStats;

    /// Mean of all numeric `temperature` values.
    ///
    /// Returns `None` when no record carries a usable temperature.
    ///
    /// # Example
    ///
    /// ```rust
    /// use citydb_core::{CityQuery, Dataset, Record};
    ///
    /// let ds: Dataset = vec![
    ///     Record::new().with("country", "Germany").with("temperature", "10"),
    ///     Record::new().with("country", "Spain").with("temperature", "15"),
    ///     Record::new().with("country", "spain").with("temperature", "8"),
    /// ]
    /// .into();
    ///
    /// assert_eq!(ds.average_temperature(), Some(11.0));
    /// ```
    fn average_temperature(&self) -> Option<f64>;

    /// All records whose `country` equals `country` after normalization.
    fn cities_in_country(&self, country: &str) -> Vec<&Record>;

    /// Records of `country` whose temperature is strictly above `threshold`.
    ///
    /// Records without a numeric temperature never match.
    fn cities_in_country_above(&self, country: &str, threshold: f64) -> Vec<&Record>;

    /// Distinct normalized country names, sorted. Empty values are ignored.
    fn distinct_countries(&self) -> BTreeSet<String>;

    fn unique_country_count(&self) -> usize {
        self.distinct_countries().len()
    }

    /// Accent- and case-insensitive substring search over city names.
    ///
    /// An empty (or all-whitespace) query matches nothing.
    fn find_cities_by_substring(&self, substr: &str) -> Vec<&Record>;
}
