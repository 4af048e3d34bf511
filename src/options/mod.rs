//! Engine defaults with TOML file support.
//!
//! Preset durations, default easing curves and the global enable switch
//! live here. Every section uses `#[serde(default)]`, so a file that only
//! overrides `[durations]` still loads.

mod durations;
mod easing;

use std::path::Path;

pub use durations::{DurationOptions, DurationPreset};
pub use easing::EasingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct TweenOptions {
    /// When `false`, tweens snap to their targets on start.
    pub enabled: bool,
    /// Preset durations.
    pub durations: DurationOptions,
    /// Default easing curves.
    pub easing: EasingOptions,
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            durations: DurationOptions::default(),
            easing: EasingOptions::default(),
        }
    }
}

impl TweenOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TweenOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TweenError> {
        let content = std::fs::read_to_string(path).map_err(TweenError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, TweenError> {
        toml::from_str(content)
            .map_err(|e| TweenError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TweenError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TweenError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TweenError::Io)?;
        }
        std::fs::write(path, content).map_err(TweenError::Io)
    }
}
