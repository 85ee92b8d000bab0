// crates/citydb-core/src/model/search.rs
use super::{Dataset, Record, COUNTRY_FIELD, TEMPERATURE_FIELD};
use crate::common::DbStats;
use crate::folds;
use crate::query::{aggregate, select_where};
use crate::text::{fold_key, normalize_key};
use crate::traits::CityQuery;
use std::collections::BTreeSet;

fn is_country(record: &Record, country: &str) -> bool {
    record
        .get_str(COUNTRY_FIELD)
        .is_some_and(|c| normalize_key(c) == country)
}

impl CityQuery for Dataset {
    fn stats(&self) -> DbStats {
        let fields: BTreeSet<&str> = self.iter().flat_map(Record::keys).collect();
        DbStats {
            records: self.len(),
            fields: fields.len(),
            countries: self.unique_country_count(),
        }
    }

    fn average_temperature(&self) -> Option<f64> {
        aggregate(TEMPERATURE_FIELD, folds::numeric_mean, self)
    }

    fn cities_in_country(&self, country: &str) -> Vec<&Record> {
        let wanted = normalize_key(country);
        select_where(|r| is_country(r, &wanted), self)
    }

    fn cities_in_country_above(&self, country: &str, threshold: f64) -> Vec<&Record> {
        let wanted = normalize_key(country);
        select_where(
            |r| {
                is_country(r, &wanted)
                    && r.get_f64(TEMPERATURE_FIELD).is_some_and(|t| t > threshold)
            },
            self,
        )
    }

    fn distinct_countries(&self) -> BTreeSet<String> {
        aggregate(COUNTRY_FIELD, folds::distinct_normalized, self)
    }

    fn find_cities_by_substring(&self, substr: &str) -> Vec<&Record> {
        let q = fold_key(substr);
        if q.is_empty() {
            return Vec::new();
        }
        select_where(
            |r| r.name().is_some_and(|name| fold_key(name).contains(&q)),
            self,
        )
    }
}
