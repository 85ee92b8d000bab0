// crates/citydb-core/src/model/value.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar stored under one field of a [`Record`](super::Record).
///
/// Values loaded from CSV are always `Text` (already trimmed) or `Null` when a
/// row is shorter than the header. `Number` exists for records built in code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Null,
}

impl Value {
    /// Returns the text content, or `None` for numbers and nulls.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interprets the value as a number.
    ///
    /// Text is parsed after trimming. Unparseable text, `Null` and NaN all
    /// yield `None`, so numeric folds can skip them instead of poisoning
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use citydb_core::Value;
    ///
    /// assert_eq!(Value::from(" 12.5 ").as_f64(), Some(12.5));
    /// assert_eq!(Value::from("abc").as_f64(), None);
    /// assert_eq!(Value::Null.as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            Value::Text(s) => s.trim().parse::<f64>().ok()?,
            Value::Number(n) => *n,
            Value::Null => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
