//! Viewer options with TOML preset support.
//!
//! Colors, primitive sizes and camera framing parameters live here. Options
//! serialize to/from TOML; every section is `#[serde(default)]` so a preset
//! may override a single value.

mod camera;
mod colors;
mod geometry;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Atom and bond colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Primitive sizes.
    pub geometry: GeometryOptions,
    /// Camera framing and projection.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`MolError::OptionsParse`] if the text is not valid options TOML.
    pub fn from_toml(text: &str) -> Result<Self, MolError> {
        toml::from_str(text).map_err(|e| MolError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`MolError::Io`] if the file cannot be read,
    /// [`MolError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, MolError> {
        let content = std::fs::read_to_string(path).map_err(MolError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`MolError::OptionsParse`] on serialization failure,
    /// [`MolError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), MolError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolError::Io)?;
        }
        std::fs::write(path, content).map_err(MolError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ColorScheme;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[colors]
scheme = "jmol"

[geometry]
double_bond_offset = 0.2
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.colors.scheme, ColorScheme::Jmol);
        assert_eq!(opts.geometry.double_bond_offset, 0.2);
        // Everything else should be default
        assert_eq!(opts.geometry.bond_radius, 0.07);
        assert_eq!(opts.geometry.triple_bond_offset, 0.20);
        assert_eq!(opts.camera.min_distance, 5.0);
    }

    #[test]
    fn element_overrides_parse_as_rgb_triples() {
        let toml_str = r"
[colors.element_overrides]
C = [0.2, 0.2, 0.2]
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.colors.element_overrides["C"], [0.2, 0.2, 0.2]);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let result = Options::from_toml("[geometry]\nbond_radius = \"wide\"");
        assert!(matches!(result, Err(MolError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir().join(format!(
            "molscope-options-{}",
            std::process::id()
        ));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.distance_scale = 4.5;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(loaded, opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("colors"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
