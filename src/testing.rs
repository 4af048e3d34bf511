//! Recording doubles for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::animation::{TweenListener, TweenOutcome};
use crate::element::{
    Argb, ElementError, ElementHandle, MarginBox, PropertyKind, PropertyValue,
    VisualElement,
};

/// Something the mock saw, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MockEvent {
    Write(PropertyKind),
    Visible(bool),
}

/// In-memory element that records every write.
#[derive(Debug)]
pub(crate) struct MockElement {
    values: FxHashMap<PropertyKind, PropertyValue>,
    unsupported: FxHashSet<PropertyKind>,
    failing: FxHashSet<PropertyKind>,
    pub(crate) visible: bool,
    pub(crate) attached: bool,
    pub(crate) redraws: usize,
    pub(crate) events: Vec<MockEvent>,
}

const ALL_KINDS: [PropertyKind; 10] = [
    PropertyKind::Width,
    PropertyKind::Height,
    PropertyKind::Margins,
    PropertyKind::BackgroundColor,
    PropertyKind::TranslationX,
    PropertyKind::TranslationY,
    PropertyKind::ScaleX,
    PropertyKind::ScaleY,
    PropertyKind::Opacity,
    PropertyKind::TextSize,
];

impl MockElement {
    /// Visible element with every property at a neutral value.
    pub(crate) fn new() -> Self {
        let values = ALL_KINDS
            .iter()
            .map(|&kind| (kind, neutral(kind)))
            .collect();
        Self {
            values,
            unsupported: FxHashSet::default(),
            failing: FxHashSet::default(),
            visible: true,
            attached: true,
            redraws: 0,
            events: Vec::new(),
        }
    }

    /// Wrap `mock` as a shared handle, keeping a typed reference.
    pub(crate) fn share(
        mock: Self,
    ) -> (Rc<RefCell<MockElement>>, ElementHandle) {
        let typed = Rc::new(RefCell::new(mock));
        let handle: ElementHandle = typed.clone();
        (typed, handle)
    }

    pub(crate) fn shared() -> (Rc<RefCell<MockElement>>, ElementHandle) {
        Self::share(Self::new())
    }

    pub(crate) fn with(mut self, kind: PropertyKind, value: PropertyValue) -> Self {
        let _ = self.values.insert(kind, value);
        self
    }

    pub(crate) fn without(mut self, kind: PropertyKind) -> Self {
        let _ = self.unsupported.insert(kind);
        self
    }

    pub(crate) fn failing_on(mut self, kind: PropertyKind) -> Self {
        let _ = self.failing.insert(kind);
        self
    }

    pub(crate) fn set_int(&mut self, kind: PropertyKind, value: i32) {
        let _ = self.values.insert(kind, PropertyValue::Int(value));
    }

    pub(crate) fn set_float(&mut self, kind: PropertyKind, value: f32) {
        let _ = self.values.insert(kind, PropertyValue::Float(value));
    }

    pub(crate) fn set_scale_opacity(&mut self, x: f32, y: f32, opacity: f32) {
        self.set_float(PropertyKind::ScaleX, x);
        self.set_float(PropertyKind::ScaleY, y);
        self.set_float(PropertyKind::Opacity, opacity);
    }

    pub(crate) fn int(&self, kind: PropertyKind) -> i32 {
        self.values[&kind].as_int().unwrap()
    }

    pub(crate) fn float(&self, kind: PropertyKind) -> f32 {
        self.values[&kind].as_float().unwrap()
    }

    pub(crate) fn margins(&self) -> MarginBox {
        self.values[&PropertyKind::Margins].as_margins().unwrap()
    }

    pub(crate) fn color(&self) -> Argb {
        self.values[&PropertyKind::BackgroundColor].as_color().unwrap()
    }

    /// Number of writes to `kind`.
    pub(crate) fn writes_of(&self, kind: PropertyKind) -> usize {
        self.events.iter().filter(|e| **e == MockEvent::Write(kind)).count()
    }

    /// Whether the element was made visible before any value was written.
    pub(crate) fn visible_before_first_write(&self) -> bool {
        let shown =
            self.events.iter().position(|e| *e == MockEvent::Visible(true));
        let written = self
            .events
            .iter()
            .position(|e| matches!(e, MockEvent::Write(_)));
        match (shown, written) {
            (Some(s), Some(w)) => s < w,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

fn neutral(kind: PropertyKind) -> PropertyValue {
    match kind {
        PropertyKind::Width | PropertyKind::Height => PropertyValue::Int(0),
        PropertyKind::Margins => PropertyValue::Margins(MarginBox::default()),
        PropertyKind::BackgroundColor => {
            PropertyValue::Color(Argb::from_channels(255, 255, 255, 255))
        }
        PropertyKind::ScaleX | PropertyKind::ScaleY | PropertyKind::Opacity => {
            PropertyValue::Float(1.0)
        }
        PropertyKind::TranslationX | PropertyKind::TranslationY => {
            PropertyValue::Float(0.0)
        }
        PropertyKind::TextSize => PropertyValue::Float(14.0),
    }
}

impl VisualElement for MockElement {
    fn property(&self, kind: PropertyKind) -> Option<PropertyValue> {
        if self.unsupported.contains(&kind) {
            return None;
        }
        self.values.get(&kind).copied()
    }

    fn set_property(
        &mut self,
        kind: PropertyKind,
        value: PropertyValue,
    ) -> Result<(), ElementError> {
        if self.failing.contains(&kind) {
            return Err(ElementError::new(format!("{kind} is read-only")));
        }
        self.events.push(MockEvent::Write(kind));
        let _ = self.values.insert(kind, value);
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.events.push(MockEvent::Visible(visible));
        self.visible = visible;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Lifecycle notification seen by [`RecordingListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListenerEvent {
    Start,
    Finish(TweenOutcome),
}

/// Listener that appends every callback to a shared log.
pub(crate) struct RecordingListener {
    log: Rc<RefCell<Vec<ListenerEvent>>>,
}

impl RecordingListener {
    pub(crate) fn new() -> (Self, Rc<RefCell<Vec<ListenerEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl TweenListener for RecordingListener {
    fn on_start(&mut self) {
        self.log.borrow_mut().push(ListenerEvent::Start);
    }

    fn on_finish(&mut self, outcome: TweenOutcome) {
        self.log.borrow_mut().push(ListenerEvent::Finish(outcome));
    }
}
