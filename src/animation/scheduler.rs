//! Tween scheduler
//!
//! Owns every running tween and advances them from the host's frame loop.
//! The scheduler is single-threaded: the host calls [`TweenScheduler::tick`]
//! on its UI thread, and all element writes and listener callbacks happen
//! inside that call (or inside [`TweenScheduler::start`] for tweens that
//! complete immediately).
//!
//! At most one tween is active per element. Starting a tween on an element
//! that already has one cancels the old tween first, so two tweens never
//! write to the same element in the same frame.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use web_time::Instant;

use super::listener::{CancelReason, TweenOutcome};
use super::tween::Tween;
use crate::element::{ElementError, ElementHandle, ElementId, VisualElement};
use crate::error::{ConfigError, TweenError};
use crate::options::TweenOptions;
use crate::util::easing::EasingCurve;

new_key_type! {
    /// Handle to a tween registered with a [`TweenScheduler`].
    ///
    /// Keys are generational: a handle to a finished tween never aliases a
    /// newer one.
    pub struct TweenId;
}

/// Result of applying one frame to a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Values written; more frames follow.
    Applied,
    /// Final values written.
    Completed,
    /// The tween cannot continue.
    Canceled(CancelReason),
}

/// A tween plus its runtime state.
struct ActiveTween {
    tween: Tween,
    element_id: ElementId,
    easing: EasingCurve,
    installed_at: Instant,
    started: bool,
    progress: f32,
}

impl ActiveTween {
    /// Linear progress at `now`, or `None` while the start delay runs.
    fn raw_progress(&self, now: Instant) -> Option<f32> {
        let begin = self.installed_at + self.tween.delay;
        if now < begin {
            return None;
        }
        let elapsed = now.saturating_duration_since(begin);
        if elapsed >= self.tween.duration {
            return Some(1.0);
        }
        let t = elapsed.as_secs_f32() / self.tween.duration.as_secs_f32();
        Some(t.clamp(0.0, 1.0))
    }

    /// Apply the frame at linear progress `raw`.
    ///
    /// Listener start hook runs before the element is borrowed so that it
    /// may inspect the element itself.
    fn apply(&mut self, raw: f32) -> Step {
        let Some(handle) = self.tween.element.upgrade() else {
            return Step::Canceled(CancelReason::ElementReleased);
        };

        let first = !self.started;
        if first {
            self.started = true;
            log::debug!(
                "tween '{}' on {:?} started ({} tracks, {:?}, {})",
                self.tween.name,
                self.element_id,
                self.tween.tracks.len(),
                self.tween.duration,
                self.easing.name(),
            );
            if let Some(listener) = self.tween.listener.as_mut() {
                listener.on_start();
            }
        }

        let complete = raw >= 1.0;
        let eased = if complete {
            1.0
        } else {
            self.easing.evaluate(raw).max(self.progress)
        };
        self.progress = eased;

        let Ok(mut element) = handle.try_borrow_mut() else {
            log::warn!(
                "tween '{}': element {:?} is borrowed during tick",
                self.tween.name,
                self.element_id
            );
            return Step::Canceled(CancelReason::ElementReleased);
        };
        if !element.is_attached() {
            return Step::Canceled(CancelReason::ElementReleased);
        }

        if first {
            if let Some(visible) = self.tween.effects.on_start {
                element.set_visible(visible);
            }
        }

        if let Err(e) = write_tracks(&self.tween, &mut *element, eased) {
            log::warn!("tween '{}' canceled: {e}", self.tween.name);
            return Step::Canceled(CancelReason::ElementFailed);
        }
        element.request_redraw();
        log::trace!("tween '{}' progress {eased:.4}", self.tween.name);

        if !complete {
            return Step::Applied;
        }
        if let Some(visible) = self.tween.effects.on_complete {
            element.set_visible(visible);
        }
        if self.tween.hides_on_completion() {
            element.set_visible(false);
        }
        Step::Completed
    }
}

fn write_tracks(
    tween: &Tween,
    element: &mut dyn VisualElement,
    t: f32,
) -> Result<(), ElementError> {
    for track in &tween.tracks {
        track.apply(element, t)?;
    }
    Ok(())
}

/// Drives every running tween.
///
/// ```
/// use std::time::Duration;
/// use web_time::Instant;
/// use viewtween::animation::{Track, Tween, TweenScheduler};
/// # use viewtween::element::ElementHandle;
/// # fn demo(panel: &ElementHandle) -> Result<(), viewtween::TweenError> {
/// let mut scheduler = TweenScheduler::new();
/// let t0 = Instant::now();
/// let tween = Tween::on(panel)
///     .track(Track::height(0, 200))
///     .duration(Duration::from_millis(300))
///     .build()?;
/// let id = scheduler.start_at(tween, t0)?;
/// scheduler.tick(t0 + Duration::from_millis(300));
/// assert!(!scheduler.is_active(id));
/// # Ok(())
/// # }
/// ```
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, ActiveTween>,
    by_element: FxHashMap<ElementId, TweenId>,
    options: TweenOptions,
    /// Reused id buffer so ticking does not allocate.
    scratch: Vec<TweenId>,
}

impl TweenScheduler {
    /// Scheduler with default options.
    pub fn new() -> Self {
        Self::with_options(TweenOptions::default())
    }

    /// Scheduler with custom options.
    pub fn with_options(options: TweenOptions) -> Self {
        Self {
            tweens: SlotMap::with_key(),
            by_element: FxHashMap::default(),
            options,
            scratch: Vec::with_capacity(16),
        }
    }

    /// Current options.
    pub fn options(&self) -> &TweenOptions {
        &self.options
    }

    /// Replace the options. Running tweens keep their timing.
    pub fn set_options(&mut self, options: TweenOptions) {
        self.options = options;
    }

    /// Start a tween now. See [`start_at`](Self::start_at).
    pub fn start(&mut self, tween: Tween) -> Result<TweenId, TweenError> {
        self.start_at(tween, Instant::now())
    }

    /// Start a tween whose clock begins at `now`.
    ///
    /// The element is checked and missing start values are read before
    /// anything changes; on error no tween is canceled or installed. Then
    /// any tween already running on the same element is canceled
    /// ([`CancelReason::Superseded`]) and the new one is installed. A tween
    /// with zero duration and zero delay completes before this returns.
    pub fn start_at(
        &mut self,
        mut tween: Tween,
        now: Instant,
    ) -> Result<TweenId, TweenError> {
        if !self.options.enabled {
            tween.duration = std::time::Duration::ZERO;
            tween.delay = std::time::Duration::ZERO;
        }

        let handle = upgrade(&tween)?;
        prepare(&mut tween, &handle)?;

        let element_id = tween.element_id();
        if let Some(previous) = self.by_element.get(&element_id).copied() {
            log::debug!(
                "tween '{}' supersedes {previous:?} on {element_id:?}",
                tween.name
            );
            let _ = self.finish(
                previous,
                TweenOutcome::Canceled(CancelReason::Superseded),
            );
        }

        let installed = install(&tween, &handle);
        drop(handle);
        let immediate = tween.duration.is_zero() && tween.delay.is_zero();
        let easing = tween.easing.unwrap_or(self.options.easing.default);

        let id = self.tweens.insert(ActiveTween {
            tween,
            element_id,
            easing,
            installed_at: now,
            started: false,
            progress: 0.0,
        });
        let _ = self.by_element.insert(element_id, id);

        if let Err(reason) = installed {
            let _ = self.finish(id, TweenOutcome::Canceled(reason));
        } else if immediate {
            self.advance(id, now);
        }
        Ok(id)
    }

    /// Advance every running tween to `now`.
    ///
    /// Tweens still inside their start delay are left untouched.
    pub fn tick(&mut self, now: Instant) {
        let mut ids = std::mem::take(&mut self.scratch);
        ids.clear();
        ids.extend(self.tweens.keys());
        for &id in &ids {
            self.advance(id, now);
        }
        self.scratch = ids;
    }

    /// Cancel a tween. Returns `false` if it already finished.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        self.finish(id, TweenOutcome::Canceled(CancelReason::Explicit))
    }

    /// Cancel whatever tween is running on `element`.
    pub fn cancel_element(&mut self, element: &ElementHandle) -> bool {
        self.active_for(element).is_some_and(|id| self.cancel(id))
    }

    /// Jump a running tween to its final values and complete it.
    ///
    /// Returns `false` if the tween already finished.
    pub fn skip(&mut self, id: TweenId) -> bool {
        let Some(active) = self.tweens.get_mut(id) else {
            return false;
        };
        let step = active.apply(1.0);
        self.settle(id, step);
        true
    }

    /// Complete every running tween immediately.
    pub fn skip_all(&mut self) {
        let ids: Vec<TweenId> = self.tweens.keys().collect();
        for id in ids {
            let _ = self.skip(id);
        }
    }

    /// Cancel every running tween.
    pub fn cancel_all(&mut self) {
        let ids: Vec<TweenId> = self.tweens.keys().collect();
        for id in ids {
            let _ = self.cancel(id);
        }
    }

    /// Whether `id` is still running (including its start delay).
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    /// The tween currently running on `element`, if any.
    pub fn active_for(&self, element: &ElementHandle) -> Option<TweenId> {
        self.by_element.get(&ElementId::of(element)).copied()
    }

    /// Last eased progress written by a running tween.
    pub fn progress(&self, id: TweenId) -> Option<f32> {
        self.tweens.get(id).map(|a| a.progress)
    }

    /// Number of running tweens.
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Whether any tween is running.
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    fn advance(&mut self, id: TweenId, now: Instant) {
        let Some(active) = self.tweens.get_mut(id) else {
            return;
        };
        if active.tween.element.strong_count() == 0 {
            let _ = self.finish(
                id,
                TweenOutcome::Canceled(CancelReason::ElementReleased),
            );
            return;
        }
        let Some(raw) = active.raw_progress(now) else {
            return;
        };
        let step = active.apply(raw);
        self.settle(id, step);
    }

    fn settle(&mut self, id: TweenId, step: Step) {
        let outcome = match step {
            Step::Applied => return,
            Step::Completed => TweenOutcome::Completed,
            Step::Canceled(reason) => TweenOutcome::Canceled(reason),
        };
        let _ = self.finish(id, outcome);
    }

    /// Remove a tween and deliver its single terminal outcome.
    fn finish(&mut self, id: TweenId, outcome: TweenOutcome) -> bool {
        let Some(mut active) = self.tweens.remove(id) else {
            return false;
        };
        if self.by_element.get(&active.element_id) == Some(&id) {
            let _ = self.by_element.remove(&active.element_id);
        }
        log::debug!(
            "tween '{}' on {:?} {outcome}",
            active.tween.name,
            active.element_id
        );
        if let Some(mut listener) = active.tween.listener.take() {
            listener.on_finish(outcome);
        }
        true
    }
}

/// Run the start-time checks without touching any scheduler state.
///
/// Missing start values are filled from the element, so a later
/// [`TweenScheduler::start`] with the same tween reads nothing new.
pub(crate) fn validate(tween: &mut Tween) -> Result<(), TweenError> {
    let handle = upgrade(tween)?;
    prepare(tween, &handle)
}

fn upgrade(tween: &Tween) -> Result<ElementHandle, TweenError> {
    Ok(tween.element.upgrade().ok_or(ConfigError::DetachedElement)?)
}

/// Check the element and fill missing start values. Reads only.
fn prepare(tween: &mut Tween, handle: &ElementHandle) -> Result<(), TweenError> {
    let element = handle.try_borrow().map_err(|_| ConfigError::ElementBusy)?;
    if !element.is_attached() {
        return Err(ConfigError::DetachedElement.into());
    }
    for track in &mut tween.tracks {
        track.resolve(&*element)?;
    }
    Ok(())
}

/// Install-time side effects: visibility and optional start values.
fn install(tween: &Tween, handle: &ElementHandle) -> Result<(), CancelReason> {
    if tween.effects.on_install.is_none() && !tween.apply_initial_on_install {
        return Ok(());
    }
    let Ok(mut element) = handle.try_borrow_mut() else {
        return Err(CancelReason::ElementReleased);
    };
    if let Some(visible) = tween.effects.on_install {
        element.set_visible(visible);
    }
    if tween.apply_initial_on_install {
        write_tracks(tween, &mut *element, 0.0)
            .map_err(|_| CancelReason::ElementFailed)?;
        element.request_redraw();
    }
    Ok(())
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TweenScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenScheduler")
            .field("active", &self.tweens.len())
            .field("elements", &self.by_element.len())
            .field("enabled", &self.options.enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::Track;
    use crate::element::{Argb, PropertyKind};
    use crate::testing::{ListenerEvent, MockElement, RecordingListener};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_progress_reaches_exactly_one() {
        let (mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();

        let tween = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .duration_ms(100)
            .easing(EasingCurve::EaseOut)
            .listener(listener)
            .build()
            .unwrap();
        let id = scheduler.start_at(tween, t0).unwrap();

        let mut last = 0.0;
        for step in 1..=9 {
            scheduler.tick(t0 + ms(step * 10));
            let p = scheduler.progress(id).unwrap();
            assert!(p >= last, "progress went backwards: {p} < {last}");
            assert!(p < 1.0);
            last = p;
        }
        scheduler.tick(t0 + ms(100));

        assert!(!scheduler.is_active(id));
        assert_eq!(mock.borrow().float(PropertyKind::Opacity), 1.0);
        assert_eq!(
            events.borrow().as_slice(),
            &[ListenerEvent::Start, ListenerEvent::Finish(TweenOutcome::Completed)]
        );
    }

    #[test]
    fn test_late_tick_snaps_to_target() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let _id = Tween::on(&handle)
            .track(Track::translation(crate::element::Axis::Vertical, 0.0, 33.3))
            .duration_ms(50)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(5_000));
        assert_eq!(mock.borrow().float(PropertyKind::TranslationY), 33.3);
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_zero_duration_completes_inside_start() {
        let (mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();

        let tween = Tween::on(&handle)
            .track(Track::height(10, 50))
            .duration_ms(0)
            .listener(listener)
            .build()
            .unwrap();
        let id = scheduler.start_at(tween, Instant::now()).unwrap();

        assert!(!scheduler.is_active(id));
        assert_eq!(mock.borrow().int(PropertyKind::Height), 50);
        assert_eq!(mock.borrow().writes_of(PropertyKind::Height), 1);
        assert_eq!(
            events.borrow().as_slice(),
            &[ListenerEvent::Start, ListenerEvent::Finish(TweenOutcome::Completed)]
        );
    }

    #[test]
    fn test_zero_duration_with_delay_completes_on_first_tick_after_delay() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::height(10, 50))
            .duration_ms(0)
            .delay_ms(40)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(39));
        assert!(scheduler.is_active(id));
        assert_eq!(mock.borrow().writes_of(PropertyKind::Height), 0);

        scheduler.tick(t0 + ms(40));
        assert!(!scheduler.is_active(id));
        assert_eq!(mock.borrow().int(PropertyKind::Height), 50);
        assert_eq!(mock.borrow().writes_of(PropertyKind::Height), 1);
    }

    #[test]
    fn test_start_delay_defers_start_hook() {
        let (_mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .delay_ms(100)
            .duration_ms(100)
            .listener(listener)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(50));
        assert!(events.borrow().is_empty());
        assert_eq!(scheduler.progress(id), Some(0.0));

        scheduler.tick(t0 + ms(150));
        assert_eq!(events.borrow().as_slice(), &[ListenerEvent::Start]);
        let p = scheduler.progress(id).unwrap();
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (_mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .listener(listener)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();
        scheduler.tick(t0 + ms(10));

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(
            events.borrow().as_slice(),
            &[
                ListenerEvent::Start,
                ListenerEvent::Finish(TweenOutcome::Canceled(
                    CancelReason::Explicit
                )),
            ]
        );
        assert!(scheduler.active_for(&handle).is_none());
    }

    #[test]
    fn test_cancel_after_completion_is_noop() {
        let (_mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .duration_ms(10)
            .listener(listener)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();
        scheduler.tick(t0 + ms(10));

        assert!(!scheduler.cancel(id));
        let finishes = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ListenerEvent::Finish(_)))
            .count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn test_second_tween_supersedes_first_before_its_first_tick() {
        let (mock, handle) = MockElement::shared();
        let (first, first_events) = RecordingListener::new();
        let (second, second_events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();

        let a = Tween::on(&handle)
            .track(Track::height(0, 100))
            .listener(first)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();
        scheduler.tick(t0 + ms(30));
        let writes_before = mock.borrow().writes_of(PropertyKind::Height);

        let b = Tween::on(&handle)
            .track(Track::height(0, 10))
            .listener(second)
            .build()
            .and_then(|t| scheduler.start_at(t, t0 + ms(30)))
            .unwrap();

        assert_eq!(
            first_events.borrow().last(),
            Some(&ListenerEvent::Finish(TweenOutcome::Canceled(
                CancelReason::Superseded
            )))
        );
        assert!(second_events.borrow().is_empty());
        assert_eq!(mock.borrow().writes_of(PropertyKind::Height), writes_before);
        assert!(!scheduler.is_active(a));
        assert_eq!(scheduler.active_for(&handle), Some(b));
        assert_eq!(scheduler.active_count(), 1);
    }

    #[test]
    fn test_invalid_property_leaves_running_tween_alone() {
        let (_mock, handle) = {
            let mock = MockElement::new().without(PropertyKind::TextSize);
            MockElement::share(mock)
        };
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let a = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        let err = Tween::on(&handle)
            .track(Track::text_size_to(20.0))
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap_err();

        assert!(matches!(
            err,
            TweenError::InvalidPropertyKind(PropertyKind::TextSize)
        ));
        assert!(scheduler.is_active(a));
    }

    #[test]
    fn test_detached_element_rejected_at_start() {
        let (mock, handle) = MockElement::shared();
        mock.borrow_mut().attached = false;
        let mut scheduler = TweenScheduler::new();
        let err = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .build()
            .and_then(|t| scheduler.start(t))
            .unwrap_err();
        assert!(matches!(err, TweenError::Config(ConfigError::DetachedElement)));
    }

    #[test]
    fn test_dropped_element_cancels_once() {
        let (mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .listener(listener)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        drop(handle);
        drop(mock);
        scheduler.tick(t0 + ms(10));
        scheduler.tick(t0 + ms(20));

        assert!(!scheduler.is_active(id));
        assert_eq!(
            events.borrow().as_slice(),
            &[ListenerEvent::Finish(TweenOutcome::Canceled(
                CancelReason::ElementReleased
            ))]
        );
    }

    #[test]
    fn test_failing_write_cancels_without_affecting_others() {
        let (_bad, bad_handle) =
            MockElement::share(MockElement::new().failing_on(PropertyKind::Opacity));
        let (good, good_handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();

        let bad = Tween::on(&bad_handle)
            .track(Track::opacity(0.0, 1.0))
            .listener(listener)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();
        let ok = Tween::on(&good_handle)
            .track(Track::opacity(0.0, 1.0))
            .duration_ms(100)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(50));

        assert!(!scheduler.is_active(bad));
        assert!(scheduler.is_active(ok));
        let opacity = good.borrow().float(PropertyKind::Opacity);
        assert!((opacity - 0.5).abs() < 1e-6);
        assert_eq!(
            events.borrow().last(),
            Some(&ListenerEvent::Finish(TweenOutcome::Canceled(
                CancelReason::ElementFailed
            )))
        );
    }

    #[test]
    fn test_dimension_scenario() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let _id = Tween::on(&handle)
            .track(Track::height(0, 200))
            .duration_ms(300)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(150));
        assert_eq!(mock.borrow().int(PropertyKind::Height), 100);

        scheduler.tick(t0 + ms(300));
        assert_eq!(mock.borrow().int(PropertyKind::Height), 200);
        assert!(mock.borrow().visible);
    }

    #[test]
    fn test_dimension_to_zero_hides_after_final_write() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let _id = Tween::on(&handle)
            .track(Track::height(80, 0))
            .duration_ms(100)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(50));
        assert!(mock.borrow().visible);
        scheduler.tick(t0 + ms(100));
        let el = mock.borrow();
        assert_eq!(el.int(PropertyKind::Height), 0);
        assert!(!el.visible);
    }

    #[test]
    fn test_color_scenario() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let _id = Tween::on(&handle)
            .track(Track::color(
                Argb::from_channels(255, 255, 255, 255),
                Argb::from_channels(255, 0, 0, 0),
            ))
            .duration_ms(200)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(100));
        let c = mock.borrow().color();
        assert_eq!(c.channels(), [255, 128, 128, 128]);
    }

    #[test]
    fn test_one_redraw_per_tick_for_multi_track_tween() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        let _id = Tween::on(&handle)
            .tracks([
                Track::width(0, 10),
                Track::height(0, 10),
                Track::margins(Default::default(), crate::element::MarginBox::uniform(4)),
            ])
            .duration_ms(100)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(25));
        scheduler.tick(t0 + ms(50));
        assert_eq!(mock.borrow().redraws, 2);
    }

    #[test]
    fn test_skip_applies_final_values() {
        let (mock, handle) = MockElement::shared();
        let (listener, events) = RecordingListener::new();
        let mut scheduler = TweenScheduler::new();
        let id = Tween::on(&handle)
            .track(Track::width(0, 64))
            .duration_ms(10_000)
            .listener(listener)
            .build()
            .and_then(|t| scheduler.start(t))
            .unwrap();

        assert!(scheduler.skip(id));
        assert!(!scheduler.skip(id));
        assert_eq!(mock.borrow().int(PropertyKind::Width), 64);
        assert_eq!(
            events.borrow().last(),
            Some(&ListenerEvent::Finish(TweenOutcome::Completed))
        );
    }

    #[test]
    fn test_disabled_options_snap() {
        let (mock, handle) = MockElement::shared();
        let mut options = TweenOptions::default();
        options.enabled = false;
        let mut scheduler = TweenScheduler::with_options(options);
        let id = Tween::on(&handle)
            .track(Track::width(0, 64))
            .duration_ms(500)
            .delay_ms(500)
            .build()
            .and_then(|t| scheduler.start(t))
            .unwrap();
        assert!(!scheduler.is_active(id));
        assert_eq!(mock.borrow().int(PropertyKind::Width), 64);
    }

    #[test]
    fn test_independent_elements_interleave() {
        let (a, handle_a) = MockElement::shared();
        let (b, handle_b) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let t0 = Instant::now();
        for (handle, duration) in [(&handle_a, 100), (&handle_b, 200)] {
            let _id = Tween::on(handle)
                .track(Track::width(0, 100))
                .duration_ms(duration)
                .build()
                .and_then(|t| scheduler.start_at(t, t0))
                .unwrap();
        }

        scheduler.tick(t0 + ms(100));
        assert_eq!(a.borrow().int(PropertyKind::Width), 100);
        assert_eq!(b.borrow().int(PropertyKind::Width), 50);
        assert_eq!(scheduler.active_count(), 1);
    }

    #[test]
    fn test_cancel_all_and_element() {
        let (_a, handle_a) = MockElement::shared();
        let (_b, handle_b) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        for handle in [&handle_a, &handle_b] {
            let _id = Tween::on(handle)
                .track(Track::opacity(0.0, 1.0))
                .build()
                .and_then(|t| scheduler.start(t))
                .unwrap();
        }
        assert!(scheduler.cancel_element(&handle_a));
        assert!(!scheduler.cancel_element(&handle_a));
        scheduler.cancel_all();
        assert!(!scheduler.is_animating());
    }
    #[test]
    fn test_default_easing_from_options() {
        let (_mock, handle) = MockElement::shared();
        let mut options = TweenOptions::default();
        options.easing.default = EasingCurve::EaseIn;
        let mut scheduler = TweenScheduler::with_options(options);
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .duration_ms(100)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(50));
        let p = scheduler.progress(id).unwrap();
        let expected = EasingCurve::EaseIn.evaluate(0.5);
        assert!((p - expected).abs() < 1e-6);
        assert!(p < 0.45, "ease-in should lag linear, got {p}");
    }

    #[test]
    fn test_explicit_easing_overrides_options_default() {
        let (_mock, handle) = MockElement::shared();
        let mut options = TweenOptions::default();
        options.easing.default = EasingCurve::EaseIn;
        let mut scheduler = TweenScheduler::with_options(options);
        let t0 = Instant::now();
        let id = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .duration_ms(100)
            .easing(EasingCurve::Linear)
            .build()
            .and_then(|t| scheduler.start_at(t, t0))
            .unwrap();

        scheduler.tick(t0 + ms(50));
        let p = scheduler.progress(id).unwrap();
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_borrowed_element_rejected_as_busy() {
        let (mock, handle) = MockElement::shared();
        let mut scheduler = TweenScheduler::new();
        let tween = Tween::on(&handle)
            .track(Track::opacity(0.0, 1.0))
            .build()
            .unwrap();
        let guard = mock.borrow_mut();
        let err = scheduler.start(tween).unwrap_err();
        drop(guard);
        assert!(matches!(err, TweenError::Config(ConfigError::ElementBusy)));
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_validate_fills_start_values_without_installing() {
        let (mock, handle) = MockElement::shared();
        mock.borrow_mut().set_int(PropertyKind::Width, 30);
        let scheduler = TweenScheduler::new();
        let mut tween = Tween::on(&handle)
            .track(Track::width_to(90))
            .build()
            .unwrap();
        validate(&mut tween).unwrap();
        assert_eq!(tween.tracks(), &[Track::width(30, 90)]);
        assert!(!scheduler.is_animating());
        assert_eq!(mock.borrow().writes_of(PropertyKind::Width), 0);
    }
}
