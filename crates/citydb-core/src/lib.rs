// crates/citydb-core/src/lib.rs
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod folds;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod query;
pub mod report;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{CityDbError, Result};
pub use crate::loader::{locate, DEFAULT_CANDIDATES};
pub use crate::model::{Dataset, Record, Value};
pub use crate::query::{aggregate, select_where, try_aggregate, try_select_where, values};
pub use crate::report::Report;
pub use crate::traits::CityQuery;
