//! Property bindings: which element properties a track drives and how.
//!
//! [`PropertyBinding`] is the closed set of interpolation strategies. A
//! [`Track`] pairs one strategy with its typed endpoints; a tween owns one
//! or more tracks and applies all of them on every tick.

use glam::{Vec2, Vec3};

use super::interpolation::Endpoints;
use crate::element::{
    Argb, Axis, ElementError, MarginBox, PropertyKind, PropertyValue,
    VisualElement,
};
use crate::error::TweenError;

/// Interpolation strategy, selected by property kind.
///
/// Bindings carry no endpoint state and may be shared freely between
/// tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyBinding {
    /// Width or height in whole pixels.
    Dimension(Axis),
    /// Four margins, written as one value per tick.
    Margins,
    /// Background color, channel-wise ARGB.
    Color,
    /// Translation offset along one axis.
    Translation(Axis),
    /// Opacity alone.
    Opacity,
    /// Scale X and Y together.
    Scale,
    /// Scale X, scale Y and opacity together.
    ScaleOpacity,
    /// Text size in pixels.
    TextSize,
}

impl PropertyBinding {
    /// Element properties this binding reads and writes.
    pub fn kinds(self) -> &'static [PropertyKind] {
        match self {
            Self::Dimension(Axis::Horizontal) => &[PropertyKind::Width],
            Self::Dimension(Axis::Vertical) => &[PropertyKind::Height],
            Self::Margins => &[PropertyKind::Margins],
            Self::Color => &[PropertyKind::BackgroundColor],
            Self::Translation(Axis::Horizontal) => &[PropertyKind::TranslationX],
            Self::Translation(Axis::Vertical) => &[PropertyKind::TranslationY],
            Self::Opacity => &[PropertyKind::Opacity],
            Self::Scale => &[PropertyKind::ScaleX, PropertyKind::ScaleY],
            Self::ScaleOpacity => &[
                PropertyKind::ScaleX,
                PropertyKind::ScaleY,
                PropertyKind::Opacity,
            ],
            Self::TextSize => &[PropertyKind::TextSize],
        }
    }

    /// Name for debugging/logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dimension(Axis::Horizontal) => "width",
            Self::Dimension(Axis::Vertical) => "height",
            Self::Margins => "margins",
            Self::Color => "color",
            Self::Translation(Axis::Horizontal) => "translation-x",
            Self::Translation(Axis::Vertical) => "translation-y",
            Self::Opacity => "opacity",
            Self::Scale => "scale",
            Self::ScaleOpacity => "scale-opacity",
            Self::TextSize => "text-size",
        }
    }
}

/// One animated property of a tween: a binding plus typed endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Width or height in pixels.
    Dimension {
        /// Which dimension.
        axis: Axis,
        /// Start and target size.
        values: Endpoints<i32>,
    },
    /// Layout margins.
    Margins(Endpoints<MarginBox>),
    /// Background color.
    Color(Endpoints<Argb>),
    /// Translation offset.
    Translation {
        /// Which axis to move along.
        axis: Axis,
        /// Start and target offset.
        values: Endpoints<f32>,
    },
    /// Opacity.
    Opacity(Endpoints<f32>),
    /// Scale (x, y).
    Scale(Endpoints<Vec2>),
    /// Scale (x, y) and opacity packed as `(scale_x, scale_y, opacity)`.
    ScaleOpacity(Endpoints<Vec3>),
    /// Text size.
    TextSize(Endpoints<f32>),
}

impl Track {
    /// Height from `from` to `to` pixels.
    pub fn height(from: i32, to: i32) -> Self {
        Self::Dimension { axis: Axis::Vertical, values: Endpoints::new(from, to) }
    }

    /// Height from the element's current height to `to`.
    pub fn height_to(to: i32) -> Self {
        Self::Dimension { axis: Axis::Vertical, values: Endpoints::to(to) }
    }

    /// Width from `from` to `to` pixels.
    pub fn width(from: i32, to: i32) -> Self {
        Self::Dimension {
            axis: Axis::Horizontal,
            values: Endpoints::new(from, to),
        }
    }

    /// Width from the element's current width to `to`.
    pub fn width_to(to: i32) -> Self {
        Self::Dimension { axis: Axis::Horizontal, values: Endpoints::to(to) }
    }

    /// Margins from `from` to `to`.
    pub fn margins(from: MarginBox, to: MarginBox) -> Self {
        Self::Margins(Endpoints::new(from, to))
    }

    /// Background color from `from` to `to`.
    pub fn color(from: Argb, to: Argb) -> Self {
        Self::Color(Endpoints::new(from, to))
    }

    /// Translation along `axis` from `from` to `to`.
    pub fn translation(axis: Axis, from: f32, to: f32) -> Self {
        Self::Translation { axis, values: Endpoints::new(from, to) }
    }

    /// Opacity from `from` to `to`.
    pub fn opacity(from: f32, to: f32) -> Self {
        Self::Opacity(Endpoints::new(from, to))
    }

    /// Scale from the element's current scale to `(x, y)`.
    pub fn scale_to(x: f32, y: f32) -> Self {
        Self::Scale(Endpoints::to(Vec2::new(x, y)))
    }

    /// Scale and opacity from their current values to `target`.
    pub fn scale_opacity_to(target: Vec3) -> Self {
        Self::ScaleOpacity(Endpoints::to(target))
    }

    /// Text size from the element's current size to `to` pixels.
    pub fn text_size_to(to: f32) -> Self {
        Self::TextSize(Endpoints::to(to))
    }

    /// The strategy this track uses.
    pub fn binding(&self) -> PropertyBinding {
        match self {
            Self::Dimension { axis, .. } => PropertyBinding::Dimension(*axis),
            Self::Margins(_) => PropertyBinding::Margins,
            Self::Color(_) => PropertyBinding::Color,
            Self::Translation { axis, .. } => {
                PropertyBinding::Translation(*axis)
            }
            Self::Opacity(_) => PropertyBinding::Opacity,
            Self::Scale(_) => PropertyBinding::Scale,
            Self::ScaleOpacity(_) => PropertyBinding::ScaleOpacity,
            Self::TextSize(_) => PropertyBinding::TextSize,
        }
    }

    /// Whether completing this track should hide the element.
    ///
    /// True for a dimension that ends at zero.
    pub fn hides_on_completion(&self) -> bool {
        matches!(self, Self::Dimension { values, .. } if values.to == 0)
    }

    /// Check support and fill any missing start values from `element`.
    pub(crate) fn resolve(
        &mut self,
        element: &dyn VisualElement,
    ) -> Result<(), TweenError> {
        if let Some(kind) =
            self.binding().kinds().iter().find(|k| !element.supports(**k))
        {
            return Err(TweenError::InvalidPropertyKind(*kind));
        }

        match self {
            Self::Dimension { axis, values } => {
                let kind = PropertyKind::dimension(*axis);
                values.resolve(|| read(element, kind, PropertyValue::as_int))
            }
            Self::Margins(values) => values.resolve(|| {
                read(element, PropertyKind::Margins, PropertyValue::as_margins)
            }),
            Self::Color(values) => values.resolve(|| {
                read(
                    element,
                    PropertyKind::BackgroundColor,
                    PropertyValue::as_color,
                )
            }),
            Self::Translation { axis, values } => {
                let kind = PropertyKind::translation(*axis);
                values.resolve(|| read(element, kind, PropertyValue::as_float))
            }
            Self::Opacity(values) => values.resolve(|| {
                read(element, PropertyKind::Opacity, PropertyValue::as_float)
            }),
            Self::Scale(values) => values.resolve(|| {
                Ok(Vec2::new(
                    read(element, PropertyKind::ScaleX, PropertyValue::as_float)?,
                    read(element, PropertyKind::ScaleY, PropertyValue::as_float)?,
                ))
            }),
            Self::ScaleOpacity(values) => values.resolve(|| {
                Ok(Vec3::new(
                    read(element, PropertyKind::ScaleX, PropertyValue::as_float)?,
                    read(element, PropertyKind::ScaleY, PropertyValue::as_float)?,
                    read(element, PropertyKind::Opacity, PropertyValue::as_float)?,
                ))
            }),
            Self::TextSize(values) => values.resolve(|| {
                read(element, PropertyKind::TextSize, PropertyValue::as_float)
            }),
        }
    }

    /// Write the value at eased progress `t` to `element`.
    pub(crate) fn apply(
        &self,
        element: &mut dyn VisualElement,
        t: f32,
    ) -> Result<(), ElementError> {
        match self {
            Self::Dimension { axis, values } => element.set_property(
                PropertyKind::dimension(*axis),
                PropertyValue::Int(values.at(t)),
            ),
            Self::Margins(values) => element.set_property(
                PropertyKind::Margins,
                PropertyValue::Margins(values.at(t)),
            ),
            Self::Color(values) => element.set_property(
                PropertyKind::BackgroundColor,
                PropertyValue::Color(values.at(t)),
            ),
            Self::Translation { axis, values } => element.set_property(
                PropertyKind::translation(*axis),
                PropertyValue::Float(values.at(t)),
            ),
            Self::Opacity(values) => element.set_property(
                PropertyKind::Opacity,
                PropertyValue::Float(values.at(t)),
            ),
            Self::Scale(values) => {
                let v = values.at(t);
                element.set_property(
                    PropertyKind::ScaleX,
                    PropertyValue::Float(v.x),
                )?;
                element
                    .set_property(PropertyKind::ScaleY, PropertyValue::Float(v.y))
            }
            Self::ScaleOpacity(values) => {
                let v = values.at(t);
                element.set_property(
                    PropertyKind::ScaleX,
                    PropertyValue::Float(v.x),
                )?;
                element.set_property(
                    PropertyKind::ScaleY,
                    PropertyValue::Float(v.y),
                )?;
                element
                    .set_property(PropertyKind::Opacity, PropertyValue::Float(v.z))
            }
            Self::TextSize(values) => element.set_property(
                PropertyKind::TextSize,
                PropertyValue::Float(values.at(t)),
            ),
        }
    }
}

/// Read one property through a shape conversion.
fn read<T>(
    element: &dyn VisualElement,
    kind: PropertyKind,
    convert: fn(PropertyValue) -> Option<T>,
) -> Result<T, TweenError> {
    element
        .property(kind)
        .and_then(convert)
        .ok_or(TweenError::InvalidPropertyKind(kind))
}
