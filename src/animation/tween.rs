//! Tween construction and validation.

use std::rc::Rc;
use std::time::Duration;

use super::bindings::Track;
use super::listener::{BoxedListener, TweenListener};
use super::scheduler::{TweenId, TweenScheduler};
use crate::element::{ElementHandle, ElementId, WeakElement};
use crate::error::{ConfigError, TweenError};
use crate::util::easing::EasingCurve;

/// Duration used when a builder is not given one.
pub const DEFAULT_DURATION_MS: i64 = 300;

/// Visibility changes a tween makes at fixed points of its lifecycle.
///
/// `None` leaves visibility untouched. `on_complete` is skipped when the
/// tween is canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityEffects {
    /// Applied synchronously when the scheduler accepts the tween.
    pub on_install: Option<bool>,
    /// Applied on the first tick, before the first value is written.
    pub on_start: Option<bool>,
    /// Applied after the final value is written.
    pub on_complete: Option<bool>,
}

/// A validated transition request, ready for [`TweenScheduler::start`].
pub struct Tween {
    pub(crate) element: WeakElement,
    pub(crate) tracks: Vec<Track>,
    pub(crate) duration: Duration,
    pub(crate) delay: Duration,
    pub(crate) easing: Option<EasingCurve>,
    pub(crate) listener: Option<BoxedListener>,
    pub(crate) effects: VisibilityEffects,
    pub(crate) apply_initial_on_install: bool,
    pub(crate) name: &'static str,
}

impl Tween {
    /// Start building a tween targeting `element`.
    pub fn on(element: &ElementHandle) -> TweenBuilder {
        TweenBuilder::new(element)
    }

    /// Tracks driven by this tween.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Active duration after the start delay.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Wait before the first tick.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Easing curve applied to linear progress.
    ///
    /// `None` means the scheduler's configured default curve is used.
    pub fn easing(&self) -> Option<EasingCurve> {
        self.easing
    }

    /// Debug name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Visibility side effects.
    pub fn effects(&self) -> VisibilityEffects {
        self.effects
    }

    /// Identity of the target element.
    pub fn element_id(&self) -> ElementId {
        ElementId::of_weak(&self.element)
    }

    /// Whether any track hides the element when it completes.
    pub(crate) fn hides_on_completion(&self) -> bool {
        self.tracks.iter().any(Track::hides_on_completion)
    }
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("name", &self.name)
            .field("element", &self.element_id())
            .field("tracks", &self.tracks)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("easing", &self.easing)
            .field("effects", &self.effects)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

/// Builder for [`Tween`].
///
/// Durations are taken as signed milliseconds so that a negative request is
/// reported as a [`ConfigError`] instead of being clamped.
pub struct TweenBuilder {
    element: WeakElement,
    tracks: Vec<Track>,
    duration_ms: i64,
    delay_ms: i64,
    easing: Option<EasingCurve>,
    listener: Option<BoxedListener>,
    effects: VisibilityEffects,
    apply_initial_on_install: bool,
    name: &'static str,
}

impl TweenBuilder {
    /// Builder targeting `element` with a 300ms duration and the
    /// scheduler's default curve.
    pub fn new(element: &ElementHandle) -> Self {
        Self {
            element: Rc::downgrade(element),
            tracks: Vec::new(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            easing: None,
            listener: None,
            effects: VisibilityEffects::default(),
            apply_initial_on_install: false,
            name: "tween",
        }
    }

    /// Add a property track.
    #[must_use]
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Add several property tracks.
    #[must_use]
    pub fn tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Duration.
    #[must_use]
    pub fn duration(self, duration: Duration) -> Self {
        self.duration_ms(millis(duration))
    }

    /// Start delay in milliseconds.
    #[must_use]
    pub fn delay_ms(mut self, ms: i64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Start delay.
    #[must_use]
    pub fn delay(self, delay: Duration) -> Self {
        self.delay_ms(millis(delay))
    }

    /// Easing curve. Unset tweens use `TweenOptions::easing.default`.
    #[must_use]
    pub fn easing(mut self, easing: EasingCurve) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Lifecycle listener.
    #[must_use]
    pub fn listener(mut self, listener: impl TweenListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Optional, already boxed listener.
    #[must_use]
    pub fn boxed_listener(mut self, listener: Option<BoxedListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Set visibility as soon as the tween is accepted.
    #[must_use]
    pub fn visible_on_install(mut self, visible: bool) -> Self {
        self.effects.on_install = Some(visible);
        self
    }

    /// Set visibility on the first tick.
    #[must_use]
    pub fn visible_on_start(mut self, visible: bool) -> Self {
        self.effects.on_start = Some(visible);
        self
    }

    /// Set visibility when the tween completes (not when canceled).
    #[must_use]
    pub fn visible_on_complete(mut self, visible: bool) -> Self {
        self.effects.on_complete = Some(visible);
        self
    }

    /// Write the start values as soon as the tween is accepted.
    #[must_use]
    pub fn apply_initial_on_install(mut self) -> Self {
        self.apply_initial_on_install = true;
        self
    }

    /// Debug name used in logs.
    #[must_use]
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<Tween, TweenError> {
        let duration = non_negative(self.duration_ms)
            .ok_or(ConfigError::NegativeDuration(self.duration_ms))?;
        let delay = non_negative(self.delay_ms)
            .ok_or(ConfigError::NegativeDelay(self.delay_ms))?;
        if self.tracks.is_empty() {
            return Err(ConfigError::NoTracks.into());
        }
        if self.element.strong_count() == 0 {
            return Err(ConfigError::DetachedElement.into());
        }

        Ok(Tween {
            element: self.element,
            tracks: self.tracks,
            duration,
            delay,
            easing: self.easing,
            listener: self.listener,
            effects: self.effects,
            apply_initial_on_install: self.apply_initial_on_install,
            name: self.name,
        })
    }

    /// Validate and hand the tween to `scheduler`.
    pub fn start(
        self,
        scheduler: &mut TweenScheduler,
    ) -> Result<TweenId, TweenError> {
        scheduler.start(self.build()?)
    }
}

fn non_negative(ms: i64) -> Option<Duration> {
    u64::try_from(ms).ok().map(Duration::from_millis)
}

fn millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
