//! Linear interpolation for every animatable value shape.
//!
//! Integer-valued channels (pixel dimensions, margins, color channels) are
//! rounded half away from zero after interpolation. At `t == 1.0` every
//! implementation returns the target exactly.

use glam::{Vec2, Vec3};

use crate::element::{Argb, MarginBox};

/// A value that can be linearly interpolated between two endpoints.
pub trait Lerp: Copy {
    /// Value at progress `t` from `self` toward `target`.
    fn interpolate(self, target: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn interpolate(self, target: Self, t: f32) -> Self {
        if t == 1.0 {
            return target;
        }
        self + (target - self) * t
    }
}

impl Lerp for i32 {
    #[inline]
    fn interpolate(self, target: Self, t: f32) -> Self {
        if t == 1.0 {
            return target;
        }
        let delta = (target as f32 - self as f32) * t;
        (self as f32 + delta).round() as i32
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn interpolate(self, target: Self, t: f32) -> Self {
        Vec2::new(self.x.interpolate(target.x, t), self.y.interpolate(target.y, t))
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn interpolate(self, target: Self, t: f32) -> Self {
        Vec3::new(
            self.x.interpolate(target.x, t),
            self.y.interpolate(target.y, t),
            self.z.interpolate(target.z, t),
        )
    }
}

impl Lerp for MarginBox {
    fn interpolate(self, target: Self, t: f32) -> Self {
        MarginBox {
            left: self.left.interpolate(target.left, t),
            top: self.top.interpolate(target.top, t),
            right: self.right.interpolate(target.right, t),
            bottom: self.bottom.interpolate(target.bottom, t),
        }
    }
}

impl Lerp for Argb {
    /// Channel-wise in ARGB space (not perceptual), alpha included.
    fn interpolate(self, target: Self, t: f32) -> Self {
        if t == 1.0 {
            return target;
        }
        let from = self.channels();
        let to = target.channels();
        let mut out = [0_u8; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let v = i32::from(from[i]).interpolate(i32::from(to[i]), t);
            *channel = v.clamp(0, 255) as u8;
        }
        let [a, r, g, b] = out;
        Argb::from_channels(a, r, g, b)
    }
}

/// Start and target of one animated value.
///
/// `from` may be left unset; it is filled from the element's current value
/// when the tween starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints<T> {
    /// Starting value, or `None` to read it from the element.
    pub from: Option<T>,
    /// Target value.
    pub to: T,
}

impl<T: Lerp> Endpoints<T> {
    /// Explicit start and target.
    pub fn new(from: T, to: T) -> Self {
        Self { from: Some(from), to }
    }

    /// Target only; the start is read from the element.
    pub fn to(to: T) -> Self {
        Self { from: None, to }
    }

    /// Fill a missing start value using `read`.
    pub(crate) fn resolve<E>(
        &mut self,
        read: impl FnOnce() -> Result<T, E>,
    ) -> Result<(), E> {
        if self.from.is_none() {
            self.from = Some(read()?);
        }
        Ok(())
    }

    /// Start value, falling back to the target when unresolved.
    pub fn start(&self) -> T {
        self.from.unwrap_or(self.to)
    }

    /// Interpolated value at progress `t`.
    #[inline]
    pub fn at(&self, t: f32) -> T {
        self.start().interpolate(self.to, t)
    }
}
