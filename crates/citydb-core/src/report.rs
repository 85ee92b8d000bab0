// crates/citydb-core/src/report.rs
use crate::model::{Dataset, Record};
use crate::traits::CityQuery;
use serde::Serialize;
use std::fmt;

pub const GERMANY: &str = "germany";
pub const SPAIN: &str = "spain";
/// Temperature a Spanish city must exceed to be listed.
pub const SPAIN_THRESHOLD: f64 = 12.0;

/// The four fixed questions asked of a city dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    /// `None` when no record has a numeric temperature.
    pub average_temperature: Option<f64>,
    pub cities_in_germany: Vec<&'a Record>,
    pub cities_in_spain_above_threshold: Vec<&'a Record>,
    pub unique_country_count: usize,
}

impl<'a> Report<'a> {
    pub fn compute(dataset: &'a Dataset) -> Self {
        Report {
            average_temperature: dataset.average_temperature(),
            cities_in_germany: dataset.cities_in_country(GERMANY),
            cities_in_spain_above_threshold: dataset
                .cities_in_country_above(SPAIN, SPAIN_THRESHOLD),
            unique_country_count: dataset.unique_country_count(),
        }
    }

    #[cfg(feature = "json")]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_temperature {
            Some(avg) => writeln!(f, "Average temperature of all the cities: {avg}")?,
            None => writeln!(f, "Average temperature of all the cities: no data")?,
        }

        writeln!(f, "\nCities in Germany:")?;
        for c in &self.cities_in_germany {
            writeln!(f, "{c}")?;
        }

        writeln!(f, "\nCities in Spain with temperature > {SPAIN_THRESHOLD}°C:")?;
        for c in &self.cities_in_spain_above_threshold {
            writeln!(f, "{c}")?;
        }

        write!(f, "\nNumber of unique countries: {}", self.unique_country_count)
    }
}
