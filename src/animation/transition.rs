//! Ready-made transitions built from tracks and visibility effects.
//!
//! Each preset returns a [`TweenBuilder`] so callers can still adjust the
//! delay, listener or easing before starting it. The scheduler helpers at
//! the bottom fill durations and curves from [`TweenOptions`].
//!
//! [`TweenOptions`]: crate::options::TweenOptions

use std::time::Duration;

use glam::Vec3;

use super::bindings::Track;
use super::interpolation::Endpoints;
use super::listener::BoxedListener;
use super::scheduler::{validate, TweenId, TweenScheduler};
use super::tween::{Tween, TweenBuilder};
use crate::element::{Argb, Axis, ElementHandle, MarginBox};
use crate::error::{ConfigError, TweenError};
use crate::options::DurationPreset;
use crate::util::easing::EasingCurve;

/// Grow and fade in to full scale and opacity.
///
/// The element becomes visible on the first tick, before any value is
/// written.
#[must_use]
pub fn show(
    element: &ElementHandle,
    duration: Duration,
    easing: EasingCurve,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::scale_opacity_to(Vec3::ONE))
        .duration(duration)
        .easing(easing)
        .visible_on_start(true)
        .name("show")
}

/// Shrink and fade out, hiding the element on completion.
///
/// A canceled hide leaves the element visible.
#[must_use]
pub fn hide(
    element: &ElementHandle,
    duration: Duration,
    easing: EasingCurve,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::scale_opacity_to(Vec3::ZERO))
        .duration(duration)
        .easing(easing)
        .visible_on_start(true)
        .visible_on_complete(false)
        .name("hide")
}

/// Set opacity to `initial_alpha` and show the element immediately, then
/// fade to opaque.
#[must_use]
pub fn fade_in(
    element: &ElementHandle,
    initial_alpha: f32,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::opacity(initial_alpha, 1.0))
        .duration(duration)
        .apply_initial_on_install()
        .visible_on_install(true)
        .name("fade-in")
}

/// Set opacity to `initial_alpha`, fade to transparent and hide.
#[must_use]
pub fn fade_out(
    element: &ElementHandle,
    initial_alpha: f32,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::opacity(initial_alpha, 0.0))
        .duration(duration)
        .apply_initial_on_install()
        .visible_on_complete(false)
        .name("fade-out")
}

/// Scale to `(x, y)` after `delay`. No visibility change.
#[must_use]
pub fn scale(
    element: &ElementHandle,
    x: f32,
    y: f32,
    delay: Duration,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::scale_to(x, y))
        .delay(delay)
        .duration(duration)
        .easing(EasingCurve::EaseIn)
        .name("scale")
}

/// Translate horizontally from `from` to `to`.
#[must_use]
pub fn move_horizontally(
    element: &ElementHandle,
    from: f32,
    to: f32,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::translation(Axis::Horizontal, from, to))
        .duration(duration)
        .name("move-x")
}

/// Translate vertically from `from` to `to`.
#[must_use]
pub fn move_vertically(
    element: &ElementHandle,
    from: f32,
    to: f32,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::translation(Axis::Vertical, from, to))
        .duration(duration)
        .name("move-y")
}

/// Resize from the current size. `None` leaves that dimension alone.
///
/// The element is shown when the tween starts; a dimension ending at zero
/// hides it again on completion.
#[must_use]
pub fn resize(
    element: &ElementHandle,
    width: Option<i32>,
    height: Option<i32>,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .tracks(width.map(Track::width_to))
        .tracks(height.map(Track::height_to))
        .duration(duration)
        .visible_on_start(true)
        .name("resize")
}

/// Resize width from the current width.
#[must_use]
pub fn resize_width(
    element: &ElementHandle,
    to: i32,
    duration: Duration,
) -> TweenBuilder {
    resize(element, Some(to), None, duration)
}

/// Resize height from the current height.
#[must_use]
pub fn resize_height(
    element: &ElementHandle,
    to: i32,
    duration: Duration,
) -> TweenBuilder {
    resize(element, None, Some(to), duration)
}

/// Resize and move margins in lockstep.
///
/// All three tracks are written in the same tick, so no frame shows new
/// dimensions with stale margins.
#[must_use]
pub fn resize_with_margin(
    element: &ElementHandle,
    width: i32,
    height: i32,
    margins: MarginBox,
    duration: Duration,
) -> TweenBuilder {
    resize(element, Some(width), Some(height), duration)
        .track(Track::Margins(Endpoints::to(margins)))
        .name("resize-with-margin")
}

/// Move margins from `from` to `to`.
#[must_use]
pub fn margins(
    element: &ElementHandle,
    from: MarginBox,
    to: MarginBox,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::margins(from, to))
        .duration(duration)
        .name("margins")
}

/// Blend the background from `from` to `to`.
#[must_use]
pub fn background_color(
    element: &ElementHandle,
    from: Argb,
    to: Argb,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::color(from, to))
        .duration(duration)
        .name("background-color")
}

/// Change text size from the current size.
#[must_use]
pub fn text_size(
    element: &ElementHandle,
    to: f32,
    duration: Duration,
) -> TweenBuilder {
    Tween::on(element)
        .track(Track::text_size_to(to))
        .duration(duration)
        .name("text-size")
}

impl TweenScheduler {
    /// Show `element` with the configured show duration and curve.
    pub fn show(
        &mut self,
        element: &ElementHandle,
    ) -> Result<TweenId, TweenError> {
        self.show_with(element, Duration::ZERO, None)
    }

    /// Show `element` after `delay`, reporting to `listener`.
    pub fn show_with(
        &mut self,
        element: &ElementHandle,
        delay: Duration,
        listener: Option<BoxedListener>,
    ) -> Result<TweenId, TweenError> {
        let tween = self.show_tween(element, delay, listener)?;
        self.start(tween)
    }

    /// Hide `element` with the configured hide duration and curve.
    ///
    /// Returns `Ok(None)` without starting anything when the element is
    /// already hidden and nothing is animating it.
    pub fn hide(
        &mut self,
        element: &ElementHandle,
    ) -> Result<Option<TweenId>, TweenError> {
        self.hide_with(element, Duration::ZERO, None)
    }

    /// [`hide`](Self::hide) after `delay`, reporting to `listener`.
    ///
    /// The listener is dropped unnotified when the hide is skipped.
    pub fn hide_with(
        &mut self,
        element: &ElementHandle,
        delay: Duration,
        listener: Option<BoxedListener>,
    ) -> Result<Option<TweenId>, TweenError> {
        match self.hide_tween(element, delay, listener)? {
            Some(tween) => self.start(tween).map(Some),
            None => Ok(None),
        }
    }

    /// Show `incoming` and hide `outgoing` as two independent tweens.
    ///
    /// Both tweens are checked before either starts, so an error leaves
    /// both elements and the scheduler untouched.
    pub fn cross_fade(
        &mut self,
        incoming: &ElementHandle,
        outgoing: &ElementHandle,
    ) -> Result<(TweenId, Option<TweenId>), TweenError> {
        let mut shown = self.show_tween(incoming, Duration::ZERO, None)?;
        let mut hidden = self.hide_tween(outgoing, Duration::ZERO, None)?;
        validate(&mut shown)?;
        if let Some(tween) = hidden.as_mut() {
            validate(tween)?;
        }
        match hidden {
            Some(hidden) => {
                let (shown, hidden) = self.start_both(shown, hidden)?;
                Ok((shown, Some(hidden)))
            }
            None => Ok((self.start(shown)?, None)),
        }
    }

    /// Opacity-only cross-fade: fade `incoming` in from transparent and
    /// `outgoing` out from opaque.
    ///
    /// Like [`cross_fade`](Self::cross_fade), nothing starts unless both
    /// tweens are valid.
    pub fn cross_fade_views(
        &mut self,
        incoming: &ElementHandle,
        outgoing: &ElementHandle,
        duration: Duration,
    ) -> Result<(TweenId, TweenId), TweenError> {
        let mut faded_in = fade_in(incoming, 0.0, duration).build()?;
        let mut faded_out = fade_out(outgoing, 1.0, duration).build()?;
        validate(&mut faded_in)?;
        validate(&mut faded_out)?;
        self.start_both(faded_in, faded_out)
    }

    fn show_tween(
        &self,
        element: &ElementHandle,
        delay: Duration,
        listener: Option<BoxedListener>,
    ) -> Result<Tween, TweenError> {
        let options = self.options();
        show(
            element,
            options.durations.get(DurationPreset::ShowHide),
            options.easing.show,
        )
        .delay(delay)
        .boxed_listener(listener)
        .build()
    }

    /// `None` when the element is hidden and idle.
    fn hide_tween(
        &self,
        element: &ElementHandle,
        delay: Duration,
        listener: Option<BoxedListener>,
    ) -> Result<Option<Tween>, TweenError> {
        let visible = element
            .try_borrow()
            .map_err(|_| ConfigError::ElementBusy)?
            .is_visible();
        if !visible && self.active_for(element).is_none() {
            log::debug!("hide skipped: element already hidden");
            return Ok(None);
        }
        let options = self.options();
        hide(
            element,
            options.durations.get(DurationPreset::ShowHide),
            options.easing.hide,
        )
        .delay(delay)
        .boxed_listener(listener)
        .build()
        .map(Some)
    }

    /// Start two already validated tweens. If the second one is rejected
    /// anyway, the first is canceled before the error is returned.
    fn start_both(
        &mut self,
        first: Tween,
        second: Tween,
    ) -> Result<(TweenId, TweenId), TweenError> {
        let first = self.start(first)?;
        match self.start(second) {
            Ok(second) => Ok((first, second)),
            Err(e) => {
                let _ = self.cancel(first);
                Err(e)
            }
        }
    }
}
