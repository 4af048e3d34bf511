//! Easing curves that remap linear elapsed time to tween progress.
//!
//! Every curve maps 0.0 to exactly 0.0 and 1.0 to exactly 1.0, so a
//! completed tween always lands precisely on its target value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve variants for tween progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingCurve {
    /// Linear progress (no easing).
    #[default]
    Linear,
    /// Slow start, fast end. Material "fast out, linear in":
    /// `cubic-bezier(0.4, 0, 1, 1)`.
    EaseIn,
    /// Fast start, slow settle. Material "linear out, slow in":
    /// `cubic-bezier(0, 0, 0.2, 1)`.
    EaseOut,
    /// Quadratic ease-in (t²).
    QuadraticIn,
    /// Quadratic ease-out (1 - (1 - t)²).
    QuadraticOut,
    /// Custom cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier {
        /// First control point x, in [0, 1].
        x1: f32,
        /// First control point y.
        y1: f32,
        /// Second control point x, in [0, 1].
        x2: f32,
        /// Second control point y.
        y2: f32,
    },
}

impl EasingCurve {
    /// Evaluate the curve at linear time `t`.
    ///
    /// Input is clamped to [0.0, 1.0]. The endpoints are returned exactly.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            EasingCurve::Linear => t,
            EasingCurve::EaseIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
            EasingCurve::EaseOut => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            EasingCurve::QuadraticIn => t * t,
            EasingCurve::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingCurve::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }

    /// Short lowercase name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            EasingCurve::Linear => "linear",
            EasingCurve::EaseIn => "ease-in",
            EasingCurve::EaseOut => "ease-out",
            EasingCurve::QuadraticIn => "quadratic-in",
            EasingCurve::QuadraticOut => "quadratic-out",
            EasingCurve::CubicBezier { .. } => "cubic-bezier",
        }
    }
}

/// Solve the bezier for `x == progress`, then sample y at that parameter.
///
/// Newton-Raphson first, bisection when the derivative flattens out.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    let mut t = progress;
    let mut converged = false;
    for _ in 0..8 {
        let x = bezier_axis(x1, x2, t) - progress;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = bezier_axis_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = progress;
        for _ in 0..24 {
            let x = bezier_axis(x1, x2, t);
            if (x - progress).abs() < 1e-6 {
                break;
            }
            if x < progress {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
    }

    bezier_axis(y1, y2, t)
}

/// One axis of the curve: 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³.
#[inline]
fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let omt = 1.0 - t;
    3.0 * omt * omt * t * p1 + 3.0 * omt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_axis_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let omt = 1.0 - t;
    3.0 * omt * omt * p1 + 6.0 * omt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
