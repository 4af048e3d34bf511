//! Tween engine: typed tracks, a per-frame scheduler and transition presets.

mod bindings;
mod interpolation;
mod listener;
mod scheduler;
pub mod transition;
mod tween;

pub use bindings::{PropertyBinding, Track};
pub use interpolation::{Endpoints, Lerp};
pub use listener::{
    BoxedListener, CancelReason, FnListener, TweenListener, TweenOutcome,
};
pub use scheduler::{TweenId, TweenScheduler};
pub use tween::{Tween, TweenBuilder, VisibilityEffects, DEFAULT_DURATION_MS};
