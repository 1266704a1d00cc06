//! Mapping file parsing.
//!
//! Parses a `pier.toml` file into an intermediate `RawMapping` structure that
//! preserves the optional nature of all sections before resolution into a
//! [`Mapping`](crate::Mapping).

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{MappingError, TransformSpec};

/// Raw mapping as parsed directly from a TOML file.
///
/// All sections are optional; defaults are applied during resolution.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMapping {
    /// Field projection and search field lists.
    pub fields: Option<RawFields>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Highlight tag settings section.
    pub highlight: Option<RawHighlightSettings>,
    /// Ordered transformation processor specs, applied before projection.
    pub transform: Option<Vec<TransformSpec>>,
}

/// Raw field lists from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFields {
    /// Fields searched by the keyword clause and highlighted in results.
    pub text: Option<Vec<String>>,
    /// Fields normalized and indexed under the `filter_` prefix.
    pub filter: Option<Vec<String>>,
    /// Fields indexed verbatim, unprefixed.
    pub non_filter: Option<Vec<String>>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Results per page.
    pub page_size: Option<usize>,
}

/// Raw highlight tag settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHighlightSettings {
    /// Tag inserted before each highlighted span.
    pub pre_tag: Option<String>,
    /// Tag inserted after each highlighted span.
    pub post_tag: Option<String>,
}

/// Parses mapping TOML from a string.
pub fn parse_mapping(contents: &str) -> Result<RawMapping, toml::de::Error> {
    toml::from_str(contents)
}

/// Parses a mapping file from disk.
pub fn parse_mapping_file(path: &Path) -> Result<RawMapping, MappingError> {
    let contents = fs::read_to_string(path).map_err(|source| MappingError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_mapping(&contents).map_err(|source| MappingError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
