//! Property kinds and the value shapes exchanged with elements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal or vertical axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// X axis (width, horizontal translation).
    Horizontal,
    /// Y axis (height, vertical translation).
    Vertical,
}

/// A property of a visual element that the engine can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Layout width in pixels.
    Width,
    /// Layout height in pixels.
    Height,
    /// Layout margins (left, top, right, bottom).
    Margins,
    /// Packed ARGB background color.
    BackgroundColor,
    /// Horizontal translation offset.
    TranslationX,
    /// Vertical translation offset.
    TranslationY,
    /// Horizontal scale factor.
    ScaleX,
    /// Vertical scale factor.
    ScaleY,
    /// Opacity in [0, 1].
    Opacity,
    /// Text size in pixels.
    TextSize,
}

impl PropertyKind {
    /// Dimension property for an axis.
    pub fn dimension(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Width,
            Axis::Vertical => Self::Height,
        }
    }

    /// Translation property for an axis.
    pub fn translation(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::TranslationX,
            Axis::Vertical => Self::TranslationY,
        }
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Margins => "margins",
            Self::BackgroundColor => "background_color",
            Self::TranslationX => "translation_x",
            Self::TranslationY => "translation_y",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::Opacity => "opacity",
            Self::TextSize => "text_size",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four-sided layout margins in pixels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct MarginBox {
    /// Left margin.
    pub left: i32,
    /// Top margin.
    pub top: i32,
    /// Right margin.
    pub right: i32,
    /// Bottom margin.
    pub bottom: i32,
}

impl MarginBox {
    /// Margins from left, top, right, bottom.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The same margin on all four sides.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl From<[i32; 4]> for MarginBox {
    fn from([left, top, right, bottom]: [i32; 4]) -> Self {
        Self::new(left, top, right, bottom)
    }
}

/// Packed 32-bit ARGB color, `0xAARRGGBB`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Argb(pub u32);

impl Argb {
    /// Pack from individual channels.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(
            ((a as u32) << 24)
                | ((r as u32) << 16)
                | ((g as u32) << 8)
                | (b as u32),
        )
    }

    /// Channels as `[a, r, g, b]`.
    pub const fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        self.channels()[0]
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        self.channels()[1]
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        self.channels()[2]
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.channels()[3]
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// A property value as exchanged with a [`VisualElement`].
///
/// [`VisualElement`]: super::VisualElement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// Integer pixels (width, height).
    Int(i32),
    /// Floating scalar (translation, scale, opacity, text size).
    Float(f32),
    /// Layout margins.
    Margins(MarginBox),
    /// Packed color.
    Color(Argb),
}

impl PropertyValue {
    /// Integer view of a scalar value. Floats are rounded.
    pub fn as_int(self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(v),
            Self::Float(v) => Some(v.round() as i32),
            Self::Margins(_) | Self::Color(_) => None,
        }
    }

    /// Float view of a scalar value.
    pub fn as_float(self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f32),
            Self::Margins(_) | Self::Color(_) => None,
        }
    }

    /// Margins, if this is a margin value.
    pub fn as_margins(self) -> Option<MarginBox> {
        match self {
            Self::Margins(m) => Some(m),
            _ => None,
        }
    }

    /// Color, if this is a color value.
    pub fn as_color(self) -> Option<Argb> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }
}
