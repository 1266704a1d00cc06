//! Filter-value normalization shared by ingestion and query construction.
//!
//! Filterable fields are matched by exact term equality in the search engine,
//! so the value stored at index time and the term generated at query time
//! must be normalized identically. Both `pier-ingest` (when projecting
//! `filter_` fields) and `pier-query` (when building term clauses) call into
//! this crate, which is the only place the normalization rules live.
//!
//! Normalization is deliberately minimal: strip surrounding whitespace and
//! lowercase. Only string values participate; booleans and numbers pass
//! through unchanged.

#![warn(missing_docs)]

use serde_json::Value;

/// Strips leading/trailing whitespace and lowercases a string.
///
/// This is the scalar normalization primitive. Applying it twice yields the
/// same result as applying it once.
///
/// # Example
///
/// ```
/// use pier_normalize::strip_and_lowercase;
///
/// assert_eq!(strip_and_lowercase("  Foo Bar "), "foo bar");
/// ```
pub fn strip_and_lowercase(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes a JSON value for exact-match filtering.
///
/// - Strings are stripped and lowercased.
/// - Arrays are normalized element-wise, preserving order and length; string
///   elements are normalized, other elements are left unchanged.
/// - Any other value (bool, number, null, object) is returned unchanged,
///   since only string-like values participate in case/whitespace-insensitive
///   matching.
pub fn normalize_for_matching(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(strip_and_lowercase(text)),
        Value::Array(items) => Value::Array(items.iter().map(normalize_for_matching).collect()),
        other => other.clone(),
    }
}
