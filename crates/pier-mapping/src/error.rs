//! Error types for pier mapping configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or resolving a mapping.
///
/// All of these indicate a broken deployment rather than bad request data:
/// they are raised once, at load time, and are not recoverable per-request.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Failed to read a mapping file.
    #[error("failed to read mapping file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML mapping configuration.
    ///
    /// This covers unknown transformation-processor names ("unknown variant")
    /// and missing processor arguments ("missing field"), which serde rejects
    /// while deserializing [`TransformSpec`](crate::TransformSpec) entries.
    #[error("failed to parse mapping file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A field is listed as both a filter field and a non-filter field.
    ///
    /// A field must be projected at most once: either normalized under the
    /// `filter_` prefix or copied verbatim, never both.
    #[error("field '{field}' is listed in both filter and non_filter fields")]
    FieldInBothSets {
        /// The doubly-listed field name.
        field: String,
    },
}
