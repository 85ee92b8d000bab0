// crates/citydb-core/src/query.rs

//! # Generic Record Operations
//!
//! The two building blocks every query in this crate is made of:
//!
//! - [`select_where`]: keep the records a predicate accepts.
//! - [`aggregate`]: pull one field out of every record that has it and fold
//!   the values into a single result.
//!
//! Both are pure and linear in the number of records. They borrow their
//! input and hand back references into it, so a [`Dataset`](crate::Dataset)
//! is never copied or modified. The `try_*` variants accept fallible
//! predicates and folds and return the first error unchanged.

use crate::model::{Record, Value};

/// Returns the records for which `predicate` is true, in their original order.
///
/// The predicate must be total over the records it sees: a missing field
/// should count as a non-match rather than a failure. Use
/// [`try_select_where`] when the predicate can fail.
///
/// # Examples
///
/// ```rust
/// use citydb_core::{select_where, Record};
///
/// let rows = vec![
///     Record::new().with("country", "Germany"),
///     Record::new().with("country", "Spain"),
/// ];
/// let german = select_where(|r| r.get_str("country") == Some("Germany"), &rows);
/// assert_eq!(german, vec![&rows[0]]);
/// ```
pub fn select_where<'a, P, I>(predicate: P, records: I) -> Vec<&'a Record>
where
    P: Fn(&Record) -> bool,
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| predicate(r)).collect()
}

/// Fallible [`select_where`]. Stops at the first predicate error and returns it.
pub fn try_select_where<'a, P, I, E>(predicate: P, records: I) -> Result<Vec<&'a Record>, E>
where
    P: Fn(&Record) -> Result<bool, E>,
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = Vec::new();
    for record in records {
        if predicate(record)? {
            out.push(record);
        }
    }
    Ok(out)
}

/// The values stored under `key`, one per record that has the field.
///
/// Records without the field are skipped. Presence is decided by the key
/// alone: empty text, `"0"` and [`Value::Null`] are all included.
pub fn values<'a, I>(key: &str, records: I) -> Vec<&'a Value>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter_map(|r| r.get(key)).collect()
}

/// Folds the values of `key` (see [`values`]) with `fold`.
///
/// `fold` may receive an empty vector and decides itself what that means.
///
/// # Examples
///
/// ```rust
/// use citydb_core::{aggregate, Record};
///
/// let rows = vec![
///     Record::new().with("temperature", "10"),
///     Record::new().with("country", "Spain"),
///     Record::new().with("temperature", "14"),
/// ];
/// let n = aggregate("temperature", |xs| xs.len(), &rows);
/// assert_eq!(n, 2);
/// ```
pub fn aggregate<'a, F, I, T>(key: &str, fold: F, records: I) -> T
where
    F: FnOnce(Vec<&'a Value>) -> T,
    I: IntoIterator<Item = &'a Record>,
{
    fold(values(key, records))
}

/// Fallible [`aggregate`]. An error from `fold` is returned unchanged.
pub fn try_aggregate<'a, F, I, T, E>(key: &str, fold: F, records: I) -> Result<T, E>
where
    F: FnOnce(Vec<&'a Value>) -> Result<T, E>,
    I: IntoIterator<Item = &'a Record>,
{
    fold(values(key, records))
}
