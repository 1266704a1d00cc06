//! Mapping configuration for pier.
//!
//! A mapping describes how client-submitted documents become indexable
//! documents and which fields the query builder may search, filter, and
//! highlight. It is loaded from a TOML file (`pier.toml`), fully resolved up
//! front, and treated as read-only by both the ingestion pipeline and the
//! query builder.
//!
//! The same `filter` field list drives both sides: ingestion normalizes those
//! fields under a `filter_` prefix, and the query builder recognizes
//! `filter_<name>` parameters for exactly the same names. Keeping one list
//! guarantees that a stored filter value and a query filter term are
//! normalized identically.

#![warn(missing_docs)]

mod error;
mod parse;
mod templates;
mod validate;

use std::path::Path;

pub use error::MappingError;
pub use parse::{
    RawFields, RawHighlightSettings, RawMapping, RawSearchSettings, parse_mapping,
    parse_mapping_file,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
pub use templates::mapping_template;
pub use validate::MappingWarning;
use validate::validate_mapping;

/// Default mapping file name.
pub const MAPPING_FILENAME: &str = "pier.toml";

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default tag inserted before each highlighted span.
pub const DEFAULT_PRE_TAG: &str = "<em class='search-result-highlighted-text'>";

/// Default tag inserted after each highlighted span.
pub const DEFAULT_POST_TAG: &str = "</em>";

/// Fully resolved mapping configuration.
///
/// This is the single shared input of the ingestion pipeline and the query
/// builder. Construct it with [`Mapping::load`] or [`Mapping::from_raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Ordered transformation processor specs, applied before projection.
    /// Each processor sees the mutations of the ones before it.
    pub transforms: Vec<TransformSpec>,
    /// Fields normalized and indexed under the `filter_` prefix; also the
    /// recognized `filter_<name>` query parameters.
    pub filter_fields: Vec<String>,
    /// Fields indexed verbatim, unprefixed. A field in neither this list nor
    /// `filter_fields` is dropped from the indexed document.
    pub non_filter_fields: Vec<String>,
    /// Fields searched by the keyword clause and highlighted in results.
    pub text_fields: Vec<String>,
    /// Highlight tag pair.
    pub highlight: HighlightSettings,
    /// Results per page.
    pub page_size: usize,
}

/// Highlight tag settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSettings {
    /// Tag inserted before each highlighted span.
    pub pre_tag: String,
    /// Tag inserted after each highlighted span.
    pub post_tag: String,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            pre_tag: DEFAULT_PRE_TAG.to_string(),
            post_tag: DEFAULT_POST_TAG.to_string(),
        }
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self {
            transforms: Vec::new(),
            filter_fields: Vec::new(),
            non_filter_fields: Vec::new(),
            text_fields: Vec::new(),
            highlight: HighlightSettings::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A single transformation processor spec.
///
/// The wire shape is a single-entry mapping from processor name to its
/// arguments, which is exactly serde's externally tagged enum representation.
/// The set of processors is closed: adding a variant here (and its `apply`
/// arm in `pier-ingest`) is how the registry is extended. An unknown name or
/// a missing argument fails mapping deserialization, so a resolved `Mapping`
/// can only hold well-formed specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformSpec {
    /// Appends configured values to a target field when a source field
    /// contains any of the trigger values.
    AppendConditionally(AppendConditionally),
    /// Replaces a target field with a SHA-256 digest of a source field.
    CopyhashTo(CopyhashTo),
}

/// Arguments for the `append_conditionally` processor.
///
/// The motivating use case is adding a parent category whenever any of its
/// subcategories is present on the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendConditionally {
    /// Source field inspected for trigger values.
    pub field: String,
    /// Field the values are appended to. Defaults to `field`.
    #[serde(default)]
    pub target_field: Option<String>,
    /// Trigger values: the processor fires when the source field contains
    /// any of these. A scalar is accepted as a one-element list.
    #[serde(deserialize_with = "scalar_or_list")]
    pub any_of: Vec<Value>,
    /// Values appended to the target field when the processor fires.
    /// A scalar is accepted as a one-element list.
    #[serde(deserialize_with = "scalar_or_list")]
    pub append_value: Vec<Value>,
}

/// Deserializes a scalar-or-list field into a list of values.
///
/// A sequence deserializes element-wise; any scalar is accepted as a
/// one-element list. This mirrors the runtime coercion applied to document
/// fields, so a trigger written as `"SaaS"` and one written as `["SaaS"]`
/// behave identically.
fn scalar_or_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}

/// Arguments for the `copyhash_to` processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyhashTo {
    /// Source field whose text representation is hashed.
    pub field: String,
    /// Field the digest is stored under. Defaults to `field`, overwriting
    /// the source value.
    #[serde(default)]
    pub target_field: Option<String>,
}

impl AppendConditionally {
    /// The field the appended values are stored under.
    pub fn target(&self) -> &str {
        self.target_field.as_deref().unwrap_or(&self.field)
    }
}

impl CopyhashTo {
    /// The field the digest is stored under.
    pub fn target(&self) -> &str {
        self.target_field.as_deref().unwrap_or(&self.field)
    }
}

impl Mapping {
    /// Loads and resolves a mapping from a TOML file.
    ///
    /// This is the main entry point for loading configuration. Read errors,
    /// TOML errors (including unknown processor names and missing processor
    /// arguments), and field-list invariant violations all fail here, before
    /// any document or query is processed.
    pub fn load(path: &Path) -> Result<Self, MappingError> {
        let raw = parse_mapping_file(path)?;
        Self::from_raw(raw)
    }

    /// Resolves a parsed [`RawMapping`] into a `Mapping`, applying defaults.
    ///
    /// Returns [`MappingError::FieldInBothSets`] if any field is listed as
    /// both a filter field and a non-filter field.
    pub fn from_raw(raw: RawMapping) -> Result<Self, MappingError> {
        let fields = raw.fields.unwrap_or_default();
        let filter_fields = fields.filter.unwrap_or_default();
        let non_filter_fields = fields.non_filter.unwrap_or_default();

        if let Some(field) = filter_fields
            .iter()
            .find(|field| non_filter_fields.contains(field))
        {
            return Err(MappingError::FieldInBothSets {
                field: field.clone(),
            });
        }

        let highlight = raw.highlight.unwrap_or_default();
        let defaults = HighlightSettings::default();

        Ok(Self {
            transforms: raw.transform.unwrap_or_default(),
            filter_fields,
            non_filter_fields,
            text_fields: fields.text.unwrap_or_default(),
            highlight: HighlightSettings {
                pre_tag: highlight.pre_tag.unwrap_or(defaults.pre_tag),
                post_tag: highlight.post_tag.unwrap_or(defaults.post_tag),
            },
            page_size: raw
                .search
                .and_then(|search| search.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }

    /// Returns true if `field` is projected under the `filter_` prefix.
    pub fn is_filter_field(&self, field: &str) -> bool {
        self.filter_fields.iter().any(|name| name == field)
    }

    /// Returns true if `field` is projected verbatim.
    pub fn is_non_filter_field(&self, field: &str) -> bool {
        self.non_filter_fields.iter().any(|name| name == field)
    }

    /// Validates the mapping and returns any warnings.
    ///
    /// This checks for:
    /// - Text fields that no projection list emits (never searchable)
    /// - Transform targets that no projection list emits (output dropped)
    /// - An empty mapping with no projected fields at all
    pub fn validate(&self) -> Vec<MappingWarning> {
        validate_mapping(self)
    }
}
