//! Mapping template for `pier init`.

/// Default mapping template (valid TOML, modeled on a G-Cloud-style
/// services catalogue).
const MAPPING_TEMPLATE: &str = include_str!("../templates/pier.toml");

/// Returns the default mapping template.
pub fn mapping_template() -> &'static str {
    MAPPING_TEMPLATE
}
