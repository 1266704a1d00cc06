//! Integration tests for pier-mapping.
//!
//! Tests the full mapping loading pipeline: read -> parse -> resolve -> validate.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::PathBuf};

use pier_mapping::{MAPPING_FILENAME, Mapping, MappingError, MappingWarning};

/// Test helper holding a temporary directory with a mapping file.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Writes a mapping file with the given content and returns its path.
    fn write_mapping(&self, content: &str) -> PathBuf {
        let path = self.root.path().join(MAPPING_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn load_full_mapping() {
    let env = TestEnv::new();
    let path = env.write_mapping(
        r#"
[fields]
text = ["serviceName", "serviceSummary"]
filter = ["lot", "serviceCategories"]
non_filter = ["id", "serviceName", "serviceSummary"]

[search]
page_size = 50

[[transform]]
[transform.append_conditionally]
field = "serviceTypes"
target_field = "serviceCategories"
any_of = ["Implementation"]
append_value = ["Professional services"]
"#,
    );

    let mapping = Mapping::load(&path).unwrap();

    assert_eq!(mapping.page_size, 50);
    assert_eq!(mapping.text_fields, vec!["serviceName", "serviceSummary"]);
    assert!(mapping.is_filter_field("lot"));
    assert!(mapping.is_non_filter_field("id"));
    assert_eq!(mapping.transforms.len(), 1);
    assert!(mapping.validate().is_empty());
}

#[test]
fn load_missing_file_fails_with_read_error() {
    let env = TestEnv::new();
    let path = env.root.path().join("absent.toml");

    match Mapping::load(&path) {
        Err(MappingError::ReadFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ReadFile error, got {other:?}"),
    }
}

#[test]
fn load_unknown_processor_fails_loudly() {
    let env = TestEnv::new();
    let path = env.write_mapping(
        r#"
[[transform]]
[transform.uppercase]
field = "lot"
"#,
    );

    match Mapping::load(&path) {
        Err(error @ MappingError::ParseToml { .. }) => {
            let message = error.to_string();
            assert!(message.contains("uppercase"), "{message}");
        }
        other => panic!("expected ParseToml error, got {other:?}"),
    }
}

#[test]
fn load_conflicting_field_lists_fails() {
    let env = TestEnv::new();
    let path = env.write_mapping(
        r#"
[fields]
filter = ["lot"]
non_filter = ["lot"]
"#,
    );

    match Mapping::load(&path) {
        Err(MappingError::FieldInBothSets { field }) => assert_eq!(field, "lot"),
        other => panic!("expected FieldInBothSets error, got {other:?}"),
    }
}

#[test]
fn load_then_validate_reports_warnings() {
    let env = TestEnv::new();
    let path = env.write_mapping(
        r#"
[fields]
text = ["serviceName"]
filter = ["lot"]
"#,
    );

    let mapping = Mapping::load(&path).unwrap();
    let warnings = mapping.validate();

    assert_eq!(
        warnings,
        vec![MappingWarning::TextFieldNotIndexed {
            field: "serviceName".to_string()
        }]
    );
}
