//! The ingestion pipeline: transformation, then projection.

use pier_mapping::Mapping;
use pier_normalize::normalize_for_matching;
use tracing::debug;

use crate::document::Document;
use crate::transform;

/// Converts a request document into an indexable document.
///
/// First applies the mapping's transformation processors in order, each one
/// seeing the mutations of the one before it. Then projects the resulting
/// fields into the index document:
///
/// - a field in the mapping's filter list is normalized and emitted under
///   `filter_<name>`;
/// - a field in the non-filter list is emitted verbatim;
/// - any other field is omitted entirely, which is how sensitive or
///   irrelevant request fields are kept out of the index.
///
/// Never fails on document content: absent transform sources and unmapped
/// fields are silent no-ops.
pub fn build_index_document(mapping: &Mapping, mut document: Document) -> Document {
    for spec in &mapping.transforms {
        transform::apply(spec, &mut document);
    }

    let mut index_document = Document::new();
    for (field, value) in &document {
        if mapping.is_filter_field(field) {
            index_document.insert(format!("filter_{field}"), normalize_for_matching(value));
        }
        if mapping.is_non_filter_field(field) {
            index_document.insert(field.clone(), value.clone());
        }
    }

    debug!(
        transforms = mapping.transforms.len(),
        fields_in = document.len(),
        fields_out = index_document.len(),
        "built index document"
    );

    index_document
}
