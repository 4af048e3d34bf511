//! Tween lifecycle notifications.
//!
//! A tween reports its start once and then exactly one [`TweenOutcome`].
//! The outcome is delivered by value through a listener that the scheduler
//! takes out of the tween, so a second terminal notification cannot be
//! expressed.

use std::fmt;

/// Why a tween stopped before reaching progress 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Another tween was started on the same element.
    Superseded,
    /// The caller canceled it.
    Explicit,
    /// The element was dropped, detached or still borrowed by the caller.
    ElementReleased,
    /// The element rejected a property write.
    ElementFailed,
}

/// Terminal outcome of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenOutcome {
    /// Progress reached 1 and the final values were applied.
    Completed,
    /// The tween stopped early.
    Canceled(CancelReason),
}

impl TweenOutcome {
    /// Whether the tween ran to completion.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TweenOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Canceled(reason) => write!(f, "canceled ({reason:?})"),
        }
    }
}

/// Receives lifecycle callbacks for one tween.
pub trait TweenListener {
    /// Called once, right before the first value is applied.
    ///
    /// Not called if the tween is canceled during its start delay.
    fn on_start(&mut self) {}

    /// Called exactly once with the terminal outcome.
    fn on_finish(&mut self, outcome: TweenOutcome);
}

/// Boxed listener as stored by a tween.
pub type BoxedListener = Box<dyn TweenListener>;

/// Listener built from closures.
///
/// ```
/// use viewtween::animation::{FnListener, TweenOutcome};
///
/// let listener = FnListener::on_finish(|outcome: TweenOutcome| {
///     assert!(outcome.is_completed());
/// });
/// # drop(listener);
/// ```
pub struct FnListener<S, F> {
    start: S,
    finish: F,
}

impl<F: FnMut(TweenOutcome)> FnListener<fn(), F> {
    /// Listener with only a terminal callback.
    pub fn on_finish(finish: F) -> Self {
        Self { start: || {}, finish }
    }
}

impl<S: FnMut(), F: FnMut(TweenOutcome)> FnListener<S, F> {
    /// Listener with start and terminal callbacks.
    pub fn new(start: S, finish: F) -> Self {
        Self { start, finish }
    }
}

impl<S: FnMut(), F: FnMut(TweenOutcome)> TweenListener for FnListener<S, F> {
    fn on_start(&mut self) {
        (self.start)();
    }

    fn on_finish(&mut self, outcome: TweenOutcome) {
        (self.finish)(outcome);
    }
}

impl<S, F> fmt::Debug for FnListener<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}
