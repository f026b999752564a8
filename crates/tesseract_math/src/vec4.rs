//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Number of spatial axes of a [`Vec4`]
pub const AXIS_COUNT: usize = 4;

/// 4D Vector with x, y, z, w components
///
/// Axes are addressed by index as well as by name: 0 = x, 1 = y, 2 = z, 3 = w.
/// The w component is the one dropped by projection.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a Vec4 with all four components set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Build from an `[x, y, z, w]` array
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Components as an `[x, y, z, w]` array
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component at axis index `axis` (0..4)
    ///
    /// # Panics
    /// Panics if `axis >= 4`.
    #[inline]
    pub fn axis(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => panic!("axis index {} out of range for Vec4", axis),
        }
    }

    /// Mutable component at axis index `axis` (0..4)
    ///
    /// # Panics
    /// Panics if `axis >= 4`.
    #[inline]
    pub fn axis_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("axis index {} out of range for Vec4", axis),
        }
    }

    /// Copy of `self` with the component at `axis` negated
    #[inline]
    pub fn flip_axis(self, axis: usize) -> Self {
        let mut flipped = self;
        *flipped.axis_mut(axis) = -self.axis(axis);
        flipped
    }

    /// Number of axes on which `self` and `other` differ
    pub fn differing_axes(&self, other: &Self) -> usize {
        (0..AXIS_COUNT)
            .filter(|&i| self.axis(i) != other.axis(i))
            .count()
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Extract the xyz components as an array (for 3D rendering)
    #[inline]
    pub fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}
