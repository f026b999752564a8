//! Projection from 4D to 3D
//!
//! Two projections are supported:
//! - Orthographic: drop the w coordinate.
//! - Stereographic: perspective from a "light" placed on the w axis at
//!   distance `light_position`; x, y, z are divided by `light_position - w`.

use std::f32::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use crate::Vec4;

/// How rotated 4D points are reduced to 3D
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Discard w
    Orthographic,
    /// Perspective from a point on the w axis
    #[default]
    Stereographic,
}

impl ProjectionMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Stereographic,
            ProjectionMode::Stereographic => ProjectionMode::Orthographic,
        }
    }

    /// Project a rotated 4D point to 3D
    ///
    /// `light_position` is ignored in orthographic mode. In stereographic
    /// mode the caller keeps it above [`max_rotated_w`]; otherwise the
    /// result grows without bound near `w == light_position`.
    #[inline]
    pub fn project(self, v: Vec4, light_position: f32) -> [f32; 3] {
        match self {
            ProjectionMode::Orthographic => v.xyz(),
            ProjectionMode::Stereographic => {
                let s = 1.0 / (light_position - v.w);
                [v.x * s, v.y * s, v.z * s]
            }
        }
    }

    /// Size hint for vertex markers so they read the same in both modes
    ///
    /// Stereographic output shrinks roughly by `1 / light_position`, so the
    /// markers shrink with it.
    pub fn marker_scale(self, light_position: f32) -> f32 {
        const BASE: f32 = 3.0;
        match self {
            ProjectionMode::Orthographic => BASE * 0.5,
            ProjectionMode::Stereographic => BASE / light_position,
        }
    }
}

/// Largest |w| a rotated tesseract vertex of the given scale can reach
///
/// A plane touching w mixes it with one other coordinate of the same
/// magnitude, peaking at `scale * sqrt(2)` when the angle is a multiple of
/// 45 degrees. Planes never mix w with more than one partner.
#[inline]
pub fn max_rotated_w(scale: f32) -> f32 {
    scale * SQRT_2
}

/// Whether `light_position` keeps the stereographic denominator positive
/// for every rotation of a tesseract of the given scale
#[inline]
pub fn is_safe_light_position(light_position: f32, scale: f32) -> bool {
    light_position.is_finite() && light_position > max_rotated_w(scale)
}
