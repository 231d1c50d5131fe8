//! Controller and camera options with TOML preset support.
//!
//! All tweakable settings (orbit limits, input speeds, projection,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! host can keep named view presets on disk.

mod camera;
mod controls;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::OrbitOptions;
pub use keybindings::KeyBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit limits and input speeds.
    pub controls: OrbitOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), OrbitError> {
        self.camera.validate()?;
        self.controls.validate()
    }

    /// Parse and validate options from a TOML string. Missing fields use
    /// defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, OrbitError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert_eq!(
            parsed.keybindings.lookup("Space"),
            Some(KeyAction::ResetCamera)
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
max_distance = 250.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.controls.max_distance, 250.0);
        // Everything else should be default
        assert_eq!(opts.controls.min_distance, 10.0);
        assert_eq!(opts.camera.fovy, 45.0);
    }

    #[test]
    fn invalid_toml_values_are_rejected() {
        let toml_str = r"
[controls]
min_distance = 0.0
";
        assert!(matches!(
            Options::from_toml_str(toml_str),
            Err(OrbitError::InvalidOptions(_))
        ));
        assert!(matches!(
            Options::from_toml_str("controls = 3"),
            Err(OrbitError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orbitview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.controls.rotate_speed = 1.25;
        opts.save(&dir.join("close_up.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["close_up".to_owned()]);
        let loaded = Options::load(&dir.join("close_up.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn camera_options_validation() {
        let bad_fov = CameraOptions {
            fovy: 180.0,
            ..CameraOptions::default()
        };
        assert!(bad_fov.validate().is_err());
        let bad_up = CameraOptions {
            up: [0.0; 3],
            ..CameraOptions::default()
        };
        assert!(bad_up.validate().is_err());
        let bad_clip = CameraOptions {
            znear: 10.0,
            zfar: 1.0,
            ..CameraOptions::default()
        };
        assert!(bad_clip.validate().is_err());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("up").is_none());

        let controls = &props["controls"]["properties"];
        assert!(controls.get("max_polar_angle").is_some());
    }
}
