//! Transformation processors.
//!
//! Each processor is a pure mutation of the working document, driven by a
//! [`TransformSpec`] from the mapping. The set of processors is a closed
//! registry: dispatch lives in [`apply`], and extending the registry means
//! adding a [`TransformSpec`] variant plus its arm here.

use pier_mapping::{AppendConditionally, CopyhashTo, TransformSpec};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::document::{Document, ensure_value_list};

/// Applies a single transformation processor to the document.
pub(crate) fn apply(spec: &TransformSpec, document: &mut Document) {
    match spec {
        TransformSpec::AppendConditionally(spec) => append_conditionally(spec, document),
        TransformSpec::CopyhashTo(spec) => copyhash_to(spec, document),
    }
}

/// Appends `append_value` to the target field when the source field contains
/// any of the `any_of` trigger values.
///
/// The motivating use case is adding a parent category whenever one of its
/// subcategories is present. Absent source fields are a silent no-op. No
/// de-duplication is performed: applying the processor again to the already
/// updated document appends the values again.
fn append_conditionally(spec: &AppendConditionally, document: &mut Document) {
    let Some(source_value) = document.get(&spec.field) else {
        return;
    };
    let source_values = ensure_value_list(Some(source_value));

    if spec
        .any_of
        .iter()
        .any(|trigger| source_values.contains(trigger))
    {
        let mut target_values = ensure_value_list(document.get(spec.target()));
        target_values.extend(spec.append_value.iter().cloned());
        document.insert(spec.target().to_string(), Value::Array(target_values));
    }
}

/// Stores the SHA-256 digest of the source field's text representation under
/// the target field, as a lowercase hex string.
///
/// Strings hash their contents; any other value hashes its compact JSON
/// encoding. Absent source fields are a silent no-op. Re-running with the
/// same source value yields the same digest.
fn copyhash_to(spec: &CopyhashTo, document: &mut Document) {
    let Some(source_value) = document.get(&spec.field) else {
        return;
    };
    let digest = Sha256::digest(text_representation(source_value).as_bytes());
    document.insert(spec.target().to_string(), Value::String(hex::encode(digest)));
}

/// The UTF-8 text representation of a value, as fed to the digest.
fn text_representation(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
