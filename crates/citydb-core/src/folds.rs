// crates/citydb-core/src/folds.rs

//! Ready-made fold functions for [`aggregate`](crate::aggregate).
//!
//! Every fold accepts an empty input.

use crate::model::Value;
use crate::text::normalize_key;
use std::collections::BTreeSet;

/// Returns the extracted values unchanged.
pub fn collect(values: Vec<&Value>) -> Vec<&Value> {
    values
}

pub fn count(values: Vec<&Value>) -> usize {
    values.len()
}

/// Arithmetic mean of the values that read as numbers.
///
/// Values that do not parse are left out of both the sum and the count.
/// Returns `None` when nothing numeric remains, including for empty input.
///
/// ```rust
/// use citydb_core::{folds::numeric_mean, Value};
///
/// let xs = [Value::from("10"), Value::from("abc"), Value::from("13")];
/// assert_eq!(numeric_mean(xs.iter().collect()), Some(11.5));
/// assert_eq!(numeric_mean(Vec::new()), None);
/// ```
pub fn numeric_mean(values: Vec<&Value>) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .filter_map(|v| v.as_f64())
        .fold((0.0_f64, 0_usize), |(sum, n), x| (sum + x, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// The distinct values after [`normalize_key`], sorted.
///
/// `Null` and values that are empty after trimming are ignored.
pub fn distinct_normalized(values: Vec<&Value>) -> BTreeSet<String> {
    values
        .into_iter()
        .filter_map(|v| match v {
            Value::Text(s) => Some(normalize_key(s)),
            Value::Number(n) => Some(n.to_string()),
            Value::Null => None,
        })
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn distinct_normalized_count(values: Vec<&Value>) -> usize {
    distinct_normalized(values).len()
}
