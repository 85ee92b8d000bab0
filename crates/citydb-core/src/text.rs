// crates/citydb-core/src/text.rs

/// Trims surrounding whitespace and lowercases.
///
/// This is the normalization applied to CSV header names on load and to
/// country values whenever countries are compared or counted.
///
/// # Examples
///
/// ```rust
/// use citydb_core::text::normalize_key;
///
/// assert_eq!(normalize_key("  Germany "), "germany");
/// assert_eq!(normalize_key("TEMPERATURE"), "temperature");
/// ```
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Equality after [`normalize_key`] on both sides.
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

/// Convert a string into a folded key for fuzzy name matching.
///
/// Transliterates Unicode to ASCII with `deunicode` (e.g. `Málaga` -> `Malaga`),
/// then lowercases. Used for city-name search only; country comparisons use
/// the stricter [`normalize_key`].
///
/// ```rust
/// use citydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Málaga"), "malaga");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}
