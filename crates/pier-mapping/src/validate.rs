//! Mapping validation.
//!
//! Validates a resolved mapping and reports warnings for configurations that
//! load fine but silently drop data at ingestion or search time.

use std::fmt;

use crate::{Mapping, TransformSpec};

/// A non-fatal warning about the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingWarning {
    /// A text field is emitted by neither projection list, so keyword search
    /// and highlighting can never match it.
    TextFieldNotIndexed {
        /// Name of the text field.
        field: String,
    },
    /// A transform writes to a field that neither projection list emits,
    /// so its output is dropped from the indexed document.
    TransformTargetNotProjected {
        /// Name of the target field.
        field: String,
    },
    /// No fields are projected at all; every indexed document would be empty.
    NoFieldsConfigured,
}

impl fmt::Display for MappingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextFieldNotIndexed { field } => {
                write!(f, "text field '{field}' is not indexed by any field list")
            }
            Self::TransformTargetNotProjected { field } => {
                write!(f, "transform target '{field}' is dropped by projection")
            }
            Self::NoFieldsConfigured => {
                write!(f, "no filter or non_filter fields are configured")
            }
        }
    }
}

/// Validates a mapping, returning all applicable warnings.
pub(crate) fn validate_mapping(mapping: &Mapping) -> Vec<MappingWarning> {
    let mut warnings = Vec::new();

    if mapping.filter_fields.is_empty() && mapping.non_filter_fields.is_empty() {
        warnings.push(MappingWarning::NoFieldsConfigured);
    }

    for field in &mapping.text_fields {
        // Keyword search runs against unprefixed field names, so a text
        // field only matches if projection emits it verbatim.
        if !mapping.is_non_filter_field(field) {
            warnings.push(MappingWarning::TextFieldNotIndexed {
                field: field.clone(),
            });
        }
    }

    for transform in &mapping.transforms {
        let target = match transform {
            TransformSpec::AppendConditionally(spec) => spec.target(),
            TransformSpec::CopyhashTo(spec) => spec.target(),
        };
        if !mapping.is_filter_field(target) && !mapping.is_non_filter_field(target) {
            warnings.push(MappingWarning::TransformTargetNotProjected {
                field: target.to_string(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use crate::{Mapping, parse_mapping};

    use super::*;

    /// Resolves a mapping directly from TOML contents.
    fn mapping_from_str(contents: &str) -> Mapping {
        Mapping::from_raw(parse_mapping(contents).unwrap()).unwrap()
    }

    #[test]
    fn empty_mapping_warns_once() {
        let warnings = mapping_from_str("").validate();
        assert_eq!(warnings, vec![MappingWarning::NoFieldsConfigured]);
    }

    #[test]
    fn unindexed_text_field_warns() {
        let mapping = mapping_from_str(
            r#"
            [fields]
            text = ["serviceName", "lot"]
            filter = ["lot"]
            non_filter = ["serviceName"]
            "#,
        );

        let warnings = mapping.validate();
        assert_eq!(
            warnings,
            vec![MappingWarning::TextFieldNotIndexed {
                field: "lot".to_string()
            }]
        );
    }

    #[test]
    fn dropped_transform_target_warns() {
        let mapping = mapping_from_str(
            r#"
            [fields]
            non_filter = ["id"]

            [[transform]]
            [transform.copyhash_to]
            field = "email"
            target_field = "emailHash"
            "#,
        );

        let warnings = mapping.validate();
        assert_eq!(
            warnings,
            vec![MappingWarning::TransformTargetNotProjected {
                field: "emailHash".to_string()
            }]
        );
    }

    #[test]
    fn projected_transform_target_is_clean() {
        let mapping = mapping_from_str(
            r#"
            [fields]
            filter = ["emailHash"]
            non_filter = ["id"]

            [[transform]]
            [transform.copyhash_to]
            field = "email"
            target_field = "emailHash"
            "#,
        );

        assert!(mapping.validate().is_empty());
    }

    #[test]
    fn warnings_have_readable_messages() {
        let warning = MappingWarning::TextFieldNotIndexed {
            field: "lot".to_string(),
        };
        assert!(warning.to_string().contains("lot"));
    }
}
