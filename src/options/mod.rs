//! Centralized interaction-tuning options with TOML preset support.
//!
//! All tweakable settings (camera flight, hover emphasis and suppression,
//! slide navigation, overlay fades, the first-run reveal) are consolidated
//! here. Options serialize to/from TOML for tuning presets.

mod camera;
mod hover;
mod overlay;
mod reveal;
mod slide;

use std::path::Path;

pub use camera::CameraOptions;
pub use hover::HoverOptions;
pub use overlay::OverlayOptions;
pub use reveal::RevealOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use slide::SlideOptions;

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[hover]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera flight and orbit-clamp parameters.
    pub camera: CameraOptions,
    /// Hover emphasis and suppression windows.
    pub hover: HoverOptions,
    /// Portrait slide-mode parameters.
    pub slide: SlideOptions,
    /// Overlay fade and layout parameters.
    pub overlay: OverlayOptions,
    /// First-run reveal animation parameters.
    #[schemars(skip)]
    pub reveal: RevealOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
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
