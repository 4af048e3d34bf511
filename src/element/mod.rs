//! The visual-element abstraction the engine writes interpolated values to.
//!
//! Elements are owned by the caller. The scheduler only keeps a [`Weak`]
//! reference for the lifetime of a tween; if the element is dropped or
//! reports itself detached mid-transition, the tween is canceled instead of
//! writing to it.

mod property;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub use property::{Argb, Axis, MarginBox, PropertyKind, PropertyValue};

/// A UI element whose properties can be animated.
///
/// Implementations return `None` from [`property`](Self::property) for kinds
/// they do not expose; a tween touching such a kind is rejected before it
/// starts.
pub trait VisualElement {
    /// Current value of a property, or `None` if unsupported.
    fn property(&self, kind: PropertyKind) -> Option<PropertyValue>;

    /// Write a property value.
    ///
    /// An error cancels the tween that issued the write.
    fn set_property(
        &mut self,
        kind: PropertyKind,
        value: PropertyValue,
    ) -> Result<(), ElementError>;

    /// Whether the element exposes `kind`.
    fn supports(&self, kind: PropertyKind) -> bool {
        self.property(kind).is_some()
    }

    /// Whether the element is currently shown.
    fn is_visible(&self) -> bool;

    /// Show or hide the element.
    fn set_visible(&mut self, visible: bool);

    /// Ask the host to re-layout/redraw. Called once per applied tick.
    fn request_redraw(&mut self) {}

    /// `false` once the element has been removed from its host.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Shared, caller-owned reference to an element.
pub type ElementHandle = Rc<RefCell<dyn VisualElement>>;

/// Non-owning reference held by the scheduler.
pub(crate) type WeakElement = Weak<RefCell<dyn VisualElement>>;

/// Identity of an element allocation, used to key the active-tween map.
///
/// Stable for as long as any strong or weak reference to the element is
/// alive, which covers the whole lifetime of a tween targeting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

impl ElementId {
    /// Identity of the element behind `handle`.
    pub fn of(handle: &ElementHandle) -> Self {
        Self(Rc::as_ptr(handle).cast::<()>() as usize)
    }

    pub(crate) fn of_weak(element: &WeakElement) -> Self {
        Self(element.as_ptr().cast::<()>() as usize)
    }
}

/// A write rejected by an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementError {
    message: String,
}

impl ElementError {
    /// Error with a human-readable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The reason given by the element.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element rejected write: {}", self.message)
    }
}

impl std::error::Error for ElementError {}
