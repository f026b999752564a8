//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 coordinate planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Two planes that share no axis (for example XW and YZ) can rotate at the
//! same time without interfering with each other. This "double rotation" has
//! no 3D counterpart. A [`PlaneSet`] holds up to two such disjoint planes and
//! applies the same angle to each of them.

use std::fmt;

use crate::vec4::{Vec4, AXIS_COUNT};

/// The 6 coordinate rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The axis pair spanning this plane, lower axis first
    pub const fn axes(self) -> AxisPair {
        let (a, b) = match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::YZ => (1, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        };
        AxisPair { a, b }
    }
}

/// Error produced when validating rotation planes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSetError {
    /// An axis index is not in `0..4`
    AxisOutOfRange(usize),
    /// Both axes of a pair are the same
    DegeneratePair(usize),
    /// Two pairs share an axis
    OverlappingPairs(AxisPair, AxisPair),
}

impl fmt::Display for PlaneSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneSetError::AxisOutOfRange(axis) => {
                write!(f, "axis index {} is out of range (expected 0..{})", axis, AXIS_COUNT)
            }
            PlaneSetError::DegeneratePair(axis) => {
                write!(f, "rotation plane uses axis {} twice", axis)
            }
            PlaneSetError::OverlappingPairs(first, second) => {
                write!(f, "rotation planes {} and {} share an axis", first, second)
            }
        }
    }
}

impl std::error::Error for PlaneSetError {}

/// An ordered pair of distinct axis indices spanning a rotation plane
///
/// Order sets the direction of rotation: for `(a, b)` a positive angle
/// turns axis `a` towards axis `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisPair {
    a: usize,
    b: usize,
}

impl AxisPair {
    /// Create a validated axis pair
    pub fn new(a: usize, b: usize) -> Result<Self, PlaneSetError> {
        if a >= AXIS_COUNT {
            return Err(PlaneSetError::AxisOutOfRange(a));
        }
        if b >= AXIS_COUNT {
            return Err(PlaneSetError::AxisOutOfRange(b));
        }
        if a == b {
            return Err(PlaneSetError::DegeneratePair(a));
        }
        Ok(Self { a, b })
    }

    /// First axis
    #[inline]
    pub fn first(&self) -> usize {
        self.a
    }

    /// Second axis
    #[inline]
    pub fn second(&self) -> usize {
        self.b
    }

    /// Whether either axis of this pair is `axis`
    #[inline]
    pub fn contains(&self, axis: usize) -> bool {
        self.a == axis || self.b == axis
    }

    /// Whether the two pairs have an axis in common
    #[inline]
    pub fn overlaps(&self, other: &AxisPair) -> bool {
        self.contains(other.a) || self.contains(other.b)
    }

    /// Rotate the (a, b) coordinates of `source` by `angle`, writing into `target`
    ///
    /// Reads only from `source` so that several disjoint pairs can be applied
    /// to the same input without seeing each other's output.
    #[inline]
    fn rotate_into(&self, source: &Vec4, target: &mut Vec4, cos: f32, sin: f32) {
        let va = source.axis(self.a);
        let vb = source.axis(self.b);
        *target.axis_mut(self.a) = cos * va - sin * vb;
        *target.axis_mut(self.b) = sin * va + cos * vb;
    }
}

impl TryFrom<(usize, usize)> for AxisPair {
    type Error = PlaneSetError;

    fn try_from((a, b): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<AxisPair> for (usize, usize) {
    fn from(pair: AxisPair) -> Self {
        (pair.a, pair.b)
    }
}

impl From<RotationPlane> for AxisPair {
    fn from(plane: RotationPlane) -> Self {
        plane.axes()
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [char; AXIS_COUNT] = ['x', 'y', 'z', 'w'];
        write!(f, "{}{}", NAMES[self.a], NAMES[self.b])
    }
}

/// A set of mutually disjoint rotation planes sharing one angle
///
/// Holds at most two pairs, since four axes admit at most two disjoint planes.
/// An empty set is the identity rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaneSet {
    pairs: [Option<AxisPair>; 2],
}

impl PlaneSet {
    /// The identity rotation
    pub const EMPTY: Self = Self { pairs: [None, None] };

    /// Validate and collect a list of axis pairs
    pub fn new(pairs: &[AxisPair]) -> Result<Self, PlaneSetError> {
        for (i, first) in pairs.iter().enumerate() {
            if let Some(second) = pairs[i + 1..].iter().find(|p| first.overlaps(p)) {
                return Err(PlaneSetError::OverlappingPairs(*first, *second));
            }
        }
        // Disjointness over 4 axes caps the list at two pairs
        let mut set = Self::EMPTY;
        for (slot, pair) in set.pairs.iter_mut().zip(pairs) {
            *slot = Some(*pair);
        }
        Ok(set)
    }

    /// Validate raw `(a, b)` index tuples
    pub fn from_indices(pairs: &[(usize, usize)]) -> Result<Self, PlaneSetError> {
        let pairs = pairs
            .iter()
            .map(|&pair| AxisPair::try_from(pair))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&pairs)
    }

    /// A single plane
    pub fn single(plane: RotationPlane) -> Self {
        Self { pairs: [Some(plane.axes()), None] }
    }

    /// A double rotation in two planes
    ///
    /// Returns an error if the planes share an axis.
    pub fn double(first: RotationPlane, second: RotationPlane) -> Result<Self, PlaneSetError> {
        Self::new(&[first.axes(), second.axes()])
    }

    /// Iterate over the active pairs
    pub fn iter(&self) -> impl Iterator<Item = &AxisPair> {
        self.pairs.iter().flatten()
    }

    /// Rotate `v` by `angle` in every active plane
    ///
    /// Each pair rotates the coordinates of the original `v`; the result is
    /// independent of pair order.
    pub fn rotate(&self, v: Vec4, angle: f32) -> Vec4 {
        let (sin, cos) = angle.sin_cos();
        let mut rotated = v;
        for pair in self.iter() {
            pair.rotate_into(&v, &mut rotated, cos, sin);
        }
        rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (0..4).all(|i| (a.axis(i) - b.axis(i)).abs() < EPSILON)
    }

    #[test]
    fn test_plane_axes() {
        assert_eq!(RotationPlane::XW.axes(), AxisPair::new(0, 3).unwrap());
        assert_eq!(RotationPlane::YZ.axes(), AxisPair::new(1, 2).unwrap());
        for plane in RotationPlane::ALL {
            let axes = plane.axes();
            assert!(axes.first() < axes.second());
        }
    }

    #[test]
    fn test_axis_pair_validation() {
        assert_eq!(AxisPair::new(0, 4), Err(PlaneSetError::AxisOutOfRange(4)));
        assert_eq!(AxisPair::new(7, 1), Err(PlaneSetError::AxisOutOfRange(7)));
        assert_eq!(AxisPair::new(2, 2), Err(PlaneSetError::DegeneratePair(2)));
        assert!(AxisPair::new(3, 0).is_ok());
    }

    #[test]
    fn test_overlapping_pairs_rejected() {
        let err = PlaneSet::from_indices(&[(0, 1), (1, 2)]).unwrap_err();
        assert!(matches!(err, PlaneSetError::OverlappingPairs(_, _)));

        let err = PlaneSet::double(RotationPlane::XY, RotationPlane::XW).unwrap_err();
        assert!(matches!(err, PlaneSetError::OverlappingPairs(_, _)));
    }

    #[test]
    fn test_three_pairs_always_overlap() {
        assert!(PlaneSet::from_indices(&[(0, 1), (2, 3), (0, 2)]).is_err());
    }

    #[test]
    fn test_empty_set_is_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(PlaneSet::EMPTY.iter().count(), 0);
        assert_eq!(PlaneSet::EMPTY.rotate(v, 1.3), v);
    }

    #[test]
    fn test_xy_rotation_90() {
        let set = PlaneSet::single(RotationPlane::XY);
        let rotated = set.rotate(Vec4::new(1.0, 0.0, 0.0, 0.0), FRAC_PI_2);
        assert!(vec_approx_eq(rotated, Vec4::new(0.0, 1.0, 0.0, 0.0)), "got {:?}", rotated);
    }

    #[test]
    fn test_reversed_pair_rotates_backwards() {
        let forward = PlaneSet::from_indices(&[(0, 3)]).unwrap();
        let backward = PlaneSet::from_indices(&[(3, 0)]).unwrap();
        let v = Vec4::new(1.0, 0.5, -0.5, 0.25);
        assert!(vec_approx_eq(forward.rotate(v, 0.7), backward.rotate(v, -0.7)));
    }

    #[test]
    fn test_double_rotation_is_independent_of_order() {
        let a = PlaneSet::double(RotationPlane::XW, RotationPlane::YZ).unwrap();
        let b = PlaneSet::double(RotationPlane::YZ, RotationPlane::XW).unwrap();
        let v = Vec4::new(1.0, -1.0, 1.0, -1.0);
        assert_eq!(a.rotate(v, 0.4), b.rotate(v, 0.4));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let set = PlaneSet::double(RotationPlane::ZW, RotationPlane::XY).unwrap();
        let v = Vec4::new(1.0, 1.0, -1.0, 1.0);
        assert_eq!(set.rotate(v, 0.0), v);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let set = PlaneSet::double(RotationPlane::YW, RotationPlane::XZ).unwrap();
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!((set.rotate(v, 1.23).length() - v.length()).abs() < EPSILON);
    }

    #[test]
    fn test_full_turn() {
        let set = PlaneSet::double(RotationPlane::XW, RotationPlane::YZ).unwrap();
        let v = Vec4::new(1.0, -1.0, 1.0, 1.0);
        assert!(vec_approx_eq(set.rotate(v, TAU), v));
        assert!(vec_approx_eq(set.rotate(v, PI), Vec4::new(-1.0, 1.0, -1.0, -1.0)));
    }

    #[test]
    fn test_pair_tuple_conversion() {
        let pair: Result<AxisPair, _> = AxisPair::try_from((1, 1));
        assert!(pair.is_err());
        let tuple: (usize, usize) = AxisPair::new(2, 3).unwrap().into();
        assert_eq!(tuple, (2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(RotationPlane::ZW.axes().to_string(), "zw");
        let err = PlaneSetError::OverlappingPairs(RotationPlane::XY.axes(), RotationPlane::XZ.axes());
        assert_eq!(err.to_string(), "rotation planes xy and xz share an axis");
    }
}
