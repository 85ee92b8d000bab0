//! citydb-rs prelude: bring common types and traits into scope for demos.

pub use crate::error::{CityDbError, Result};
pub use crate::folds;
pub use crate::model::{Dataset, Record, Value};
pub use crate::query::{aggregate, select_where, try_aggregate, try_select_where};
pub use crate::report::Report;
pub use crate::text::{equals_normalized, fold_key, normalize_key};
pub use crate::traits::CityQuery;
pub use crate::DbStats;
