use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named duration used by the transition presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationPreset {
    /// Quick feedback transitions.
    Short,
    /// Default for layout changes.
    Medium,
    /// Large, deliberate transitions.
    Long,
    /// Show and hide.
    ShowHide,
}

/// Preset transition durations in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Durations", inline)]
#[serde(default)]
pub struct DurationOptions {
    /// Short transitions.
    #[schemars(title = "Short (ms)", range(max = 10000))]
    pub short_ms: u32,
    /// Medium transitions.
    #[schemars(title = "Medium (ms)", range(max = 10000))]
    pub medium_ms: u32,
    /// Long transitions.
    #[schemars(title = "Long (ms)", range(max = 10000))]
    pub long_ms: u32,
    /// Show and hide transitions.
    #[schemars(title = "Show/Hide (ms)", range(max = 10000))]
    pub show_hide_ms: u32,
}

impl DurationOptions {
    /// Duration for `preset`.
    pub fn get(&self, preset: DurationPreset) -> Duration {
        let ms = match preset {
            DurationPreset::Short => self.short_ms,
            DurationPreset::Medium => self.medium_ms,
            DurationPreset::Long => self.long_ms,
            DurationPreset::ShowHide => self.show_hide_ms,
        };
        Duration::from_millis(u64::from(ms))
    }
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self { short_ms: 200, medium_ms: 400, long_ms: 800, show_hide_ms: 200 }
    }
}
