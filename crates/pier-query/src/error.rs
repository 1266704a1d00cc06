//! Error types for query construction.

use thiserror::Error;

/// Request-level errors raised while constructing a query body.
///
/// These are recoverable: they describe bad request input, not a broken
/// deployment, and carry the offending raw value so the caller can report it.
/// (Configuration problems fail much earlier, when the mapping is loaded.)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The `page` parameter did not parse as an integer.
    #[error("invalid page {value}")]
    InvalidPage {
        /// The raw parameter value as received.
        value: String,
    },

    /// An aggregation was requested on a field that is not filterable.
    #[error("unknown aggregation field '{field}'")]
    UnknownAggregation {
        /// The requested field name.
        field: String,
    },
}
