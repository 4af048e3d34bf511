use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingCurve;

/// Default easing curves per transition family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Easing", inline)]
#[serde(default)]
pub struct EasingOptions {
    /// Curve for tweens that do not name one.
    pub default: EasingCurve,
    /// Curve for show transitions.
    pub show: EasingCurve,
    /// Curve for hide and scale transitions.
    pub hide: EasingCurve,
}

impl Default for EasingOptions {
    fn default() -> Self {
        Self {
            default: EasingCurve::Linear,
            show: EasingCurve::EaseOut,
            hide: EasingCurve::EaseIn,
        }
    }
}
