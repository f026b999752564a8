//! Model error types
//!
//! Errors are only produced by construction and by setters that take
//! caller-supplied indices, distances or colors. Rotation, projection and color reads
//! are total once a model exists.

use std::fmt;

use tesseract_math::{PlaneSetError, Rgb};

/// Error type for model construction and configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Scale is not a finite positive number
    InvalidScale(f32),
    /// Light position would let the stereographic denominator reach zero
    UnsafeLightPosition {
        /// The rejected value
        light_position: f32,
        /// Values must be strictly greater than this
        min_exclusive: f32,
    },
    /// Cube cell index is not in `0..8`
    InvalidCubeFace(usize),
    /// Rotation planes are out of range, degenerate or overlapping
    InvalidRotationPlanes(PlaneSetError),
    /// A color component is outside [0, 1] or NaN
    InvalidColor(Rgb),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidScale(scale) => {
                write!(f, "Invalid scale {}: must be finite and greater than zero", scale)
            }
            ModelError::UnsafeLightPosition { light_position, min_exclusive } => write!(
                f,
                "Unsafe light position {}: must be greater than {}",
                light_position, min_exclusive
            ),
            ModelError::InvalidCubeFace(index) => {
                write!(f, "Invalid cube face {}: expected 0..8", index)
            }
            ModelError::InvalidRotationPlanes(err) => write!(f, "Invalid rotation planes: {}", err),
            ModelError::InvalidColor(c) => write!(
                f,
                "Invalid color ({}, {}, {}): components must be in [0, 1]",
                c.r, c.g, c.b
            ),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidRotationPlanes(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaneSetError> for ModelError {
    fn from(err: PlaneSetError) -> Self {
        ModelError::InvalidRotationPlanes(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_scale_display() {
        let msg = ModelError::InvalidScale(-1.0).to_string();
        assert!(msg.contains("Invalid scale"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_unsafe_light_display() {
        let err = ModelError::UnsafeLightPosition { light_position: 1.0, min_exclusive: 1.5 };
        let msg = err.to_string();
        assert!(msg.contains("light position 1"));
        assert!(msg.contains("greater than 1.5"));
    }

    #[test]
    fn test_invalid_color_display() {
        let msg = ModelError::InvalidColor(Rgb::new(2.0, 0.0, 0.5)).to_string();
        assert!(msg.contains("Invalid color (2, 0, 0.5)"));
    }

    #[test]
    fn test_from_plane_set_error() {
        let err: ModelError = PlaneSetError::DegeneratePair(2).into();
        assert_eq!(err, ModelError::InvalidRotationPlanes(PlaneSetError::DegeneratePair(2)));
        assert!(err.to_string().contains("axis 2 twice"));
    }

    #[test]
    fn test_error_source() {
        let err = ModelError::InvalidRotationPlanes(PlaneSetError::AxisOutOfRange(9));
        assert!(err.source().is_some());
        assert!(ModelError::InvalidCubeFace(8).source().is_none());
    }
}
