//! Query filter classification.
//!
//! One [`QueryFilter`] is derived from each `filter_*` query parameter. The
//! multiplicity and shape of the raw values decide whether its terms combine
//! conjunctively or disjunctively:
//!
//! - `filter_lot=saas&filter_lot=paas`: repeated parameter, AND filter,
//!   `lot == saas AND lot == paas`
//! - `filter_lot=saas,paas`: single comma-separated value, OR filter,
//!   `lot == saas OR lot == paas`
//! - `filter_lot=saas`: single plain value, AND filter with one term

use pier_normalize::strip_and_lowercase;
use serde_json::{Value, json};

/// How a filter's terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// All terms must match.
    And,
    /// At least one term must match.
    Or,
}

/// A typed filter derived from one query-parameter key/value-list pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    /// The full parameter key, e.g. `filter_lot`. Terms are built against
    /// this name, matching the `filter_`-prefixed fields stored at index
    /// time.
    pub field: String,
    /// Raw values as received, one entry per repeated HTTP parameter.
    pub values: Vec<String>,
    /// Conjunctive or disjunctive, computed once at construction.
    pub kind: FilterKind,
}

impl QueryFilter {
    /// Builds a filter from a parameter key and its raw values, classifying
    /// it as AND or OR.
    pub fn new(field: impl Into<String>, values: Vec<String>) -> Self {
        let kind = classify(&values);
        Self {
            field: field.into(),
            values,
            kind,
        }
    }

    /// Returns the equality term clauses for this filter, one per term,
    /// each value normalized exactly as index-time filter values are.
    pub fn terms(&self) -> Vec<Value> {
        let term_values: Vec<&str> = match self.kind {
            FilterKind::Or => self.values[0].split(',').collect(),
            FilterKind::And => self.values.iter().map(String::as_str).collect(),
        };

        term_values
            .into_iter()
            .map(|value| json!({"term": {(self.field.as_str()): strip_and_lowercase(value)}}))
            .collect()
    }
}

/// Classifies raw values: multiple values or a single plain value are AND;
/// a single comma-separated value is OR (each segment one term).
fn classify(values: &[String]) -> FilterKind {
    if values.len() == 1 && values[0].contains(',') {
        FilterKind::Or
    } else {
        FilterKind::And
    }
}
