// crates/citydb-core/src/model/mod.rs
pub mod dataset;
pub mod record;
pub mod search;
pub mod value;

pub use dataset::Dataset;
pub use record::Record;
pub use value::Value;

/// Field holding the country name of a city record.
pub const COUNTRY_FIELD: &str = "country";
/// Field holding the temperature of a city record.
pub const TEMPERATURE_FIELD: &str = "temperature";
/// Fields tried, in order, when a city's display name is needed.
pub const NAME_FIELDS: [&str; 2] = ["city", "name"];
