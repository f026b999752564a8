//! The hypercube model
//!
//! [`HypercubeModel`] owns the fixed tesseract topology together with every
//! piece of mutable view state: vertex colors, the rotation angle and the
//! [`ViewSettings`]. All mutation goes through named setters; UI code only
//! translates events into setter calls.
//!
//! Each frame a driver calls [`HypercubeModel::step_frame`] (or
//! [`HypercubeModel::advance_rotation`]) and then reads projected positions,
//! either per vertex or all at once through [`HypercubeModel::snapshot`].

use std::f32::consts::TAU;

use tesseract_math::{
    is_safe_light_position, max_rotated_w, CubeFace, Edge, PlaneSet, ProjectionMode, Rgb,
    RotationPlane, Tesseract4D, Vec4, EDGE_COUNT, VERTEX_COUNT,
};

use crate::error::ModelError;
use crate::snapshot::{FrameSnapshot, ProjectedEdge, ProjectedVertex};

/// Default coordinate magnitude
pub const DEFAULT_SCALE: f32 = 1.0;
/// Default stereographic light position
pub const DEFAULT_LIGHT_POSITION: f32 = 2.0;
/// Default rotation step per frame, in radians
pub const DEFAULT_ROTATION_SPEED: f32 = 0.01;

/// Mutable view configuration owned by a [`HypercubeModel`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSettings {
    /// Planes rotated each frame
    pub rotation_planes: PlaneSet,
    /// 4D to 3D projection
    pub projection: ProjectionMode,
    /// Distance of the stereographic projection center along w
    pub light_position: f32,
    /// Radians added to the angle by [`HypercubeModel::step_frame`]
    pub rotation_speed: f32,
    /// Color of unhighlighted vertices
    pub base_color: Rgb,
    /// Color used by [`HypercubeModel::highlight_face`]
    pub highlight_color: Rgb,
}

impl ViewSettings {
    /// The default XW + YZ double rotation
    pub fn default_planes() -> PlaneSet {
        PlaneSet::double(RotationPlane::XW, RotationPlane::YZ).unwrap_or_default()
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            rotation_planes: Self::default_planes(),
            projection: ProjectionMode::Stereographic,
            light_position: DEFAULT_LIGHT_POSITION,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            base_color: Rgb::RED,
            highlight_color: Rgb::GREEN,
        }
    }
}

/// A tesseract with rotation, projection and per-vertex colors
#[derive(Clone, Debug)]
pub struct HypercubeModel {
    shape: Tesseract4D,
    colors: [Rgb; VERTEX_COUNT],
    highlighted: Option<CubeFace>,
    /// Rotation angle, kept in [0, 2π)
    theta: f32,
    settings: ViewSettings,
    /// Speed restored by [`HypercubeModel::toggle_pause`]
    resume_speed: f32,
}

impl HypercubeModel {
    /// Create a model with default settings apart from color and light position
    ///
    /// # Errors
    /// [`ModelError::InvalidScale`] if `scale` is not finite and positive,
    /// [`ModelError::UnsafeLightPosition`] if `light_position` is within reach
    /// of a rotated vertex, [`ModelError::InvalidColor`] if `base_color` is
    /// outside [0, 1].
    pub fn new(scale: f32, base_color: Rgb, light_position: f32) -> Result<Self, ModelError> {
        Self::from_settings(
            scale,
            ViewSettings {
                base_color,
                light_position,
                ..ViewSettings::default()
            },
        )
    }

    /// Create a model from a full set of view settings
    ///
    /// # Errors
    /// Same as [`Self::new`]; the highlight color is checked too.
    pub fn from_settings(scale: f32, settings: ViewSettings) -> Result<Self, ModelError> {
        let shape = Tesseract4D::new(scale).ok_or(ModelError::InvalidScale(scale))?;
        check_light_position(settings.light_position, scale)?;
        check_color(settings.base_color)?;
        check_color(settings.highlight_color)?;

        log::debug!(
            "Creating hypercube model: scale {}, {:?} projection, light at {}",
            scale,
            settings.projection,
            settings.light_position
        );

        let resume_speed = if settings.rotation_speed != 0.0 {
            settings.rotation_speed
        } else {
            DEFAULT_ROTATION_SPEED
        };

        Ok(Self {
            shape,
            colors: [settings.base_color; VERTEX_COUNT],
            highlighted: None,
            theta: 0.0,
            settings,
            resume_speed,
        })
    }

    // ==================== Topology ====================

    /// Coordinate magnitude
    #[inline]
    pub fn scale(&self) -> f32 {
        self.shape.scale()
    }

    /// Unrotated 4D vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        self.shape.vertices()
    }

    /// The 32 edges
    #[inline]
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        self.shape.edges()
    }

    /// Underlying geometry
    #[inline]
    pub fn shape(&self) -> &Tesseract4D {
        &self.shape
    }

    // ==================== Colors ====================

    /// Current color of every vertex
    #[inline]
    pub fn colors(&self) -> &[Rgb; VERTEX_COUNT] {
        &self.colors
    }

    /// Current color of vertex `i`
    ///
    /// # Panics
    /// Panics if `i >= 16`.
    #[inline]
    pub fn vertex_color(&self, i: usize) -> Rgb {
        self.colors[i]
    }

    /// Color of vertices outside the highlighted cell
    #[inline]
    pub fn base_color(&self) -> Rgb {
        self.settings.base_color
    }

    /// The highlighted cell, if any
    #[inline]
    pub fn highlighted_face(&self) -> Option<CubeFace> {
        self.highlighted
    }

    /// Highlight one cell, or clear the highlight with `None`
    ///
    /// Every vertex is reset to the base color first, then the vertices of
    /// `face` take `color`.
    ///
    /// # Errors
    /// [`ModelError::InvalidColor`] if `color` is outside [0, 1]; colors are
    /// left untouched.
    pub fn set_highlight(&mut self, face: Option<CubeFace>, color: Rgb) -> Result<(), ModelError> {
        check_color(color)?;
        self.paint(face, color);
        Ok(())
    }

    fn paint(&mut self, face: Option<CubeFace>, color: Rgb) {
        self.colors = [self.settings.base_color; VERTEX_COUNT];
        self.highlighted = face;

        if let Some(face) = face {
            log::debug!("Highlighting cell {} ({})", face.index(), face);
            for i in self.shape.cell_vertices(face) {
                self.colors[i] = color;
            }
        } else {
            log::debug!("Clearing highlight");
        }
    }

    /// Highlight cell `index` (0..8) with `color`
    ///
    /// # Errors
    /// [`ModelError::InvalidCubeFace`] if `index >= 8`,
    /// [`ModelError::InvalidColor`] if `color` is outside [0, 1]. Colors are
    /// left untouched on error.
    pub fn highlight_cube(&mut self, index: usize, color: Rgb) -> Result<(), ModelError> {
        let face = CubeFace::new(index).ok_or(ModelError::InvalidCubeFace(index))?;
        self.set_highlight(Some(face), color)
    }

    /// Highlight cell `face` with the configured highlight color
    pub fn highlight_face(&mut self, face: CubeFace) {
        self.paint(Some(face), self.settings.highlight_color);
    }

    /// Remove any highlight
    pub fn clear_highlight(&mut self) {
        self.paint(None, self.settings.base_color);
    }

    /// Set the base color and paint every vertex with it
    ///
    /// # Errors
    /// [`ModelError::InvalidColor`] if `color` is outside [0, 1].
    pub fn reset_color(&mut self, color: Rgb) -> Result<(), ModelError> {
        check_color(color)?;
        log::debug!("Resetting base color to {:?}", color);
        self.settings.base_color = color;
        self.clear_highlight();
        Ok(())
    }

    /// Set the color used by [`Self::highlight_face`]
    ///
    /// Re-applies the current highlight so the change is visible at once.
    ///
    /// # Errors
    /// [`ModelError::InvalidColor`] if `color` is outside [0, 1].
    pub fn set_highlight_color(&mut self, color: Rgb) -> Result<(), ModelError> {
        check_color(color)?;
        self.settings.highlight_color = color;
        if let Some(face) = self.highlighted {
            self.paint(Some(face), color);
        }
        Ok(())
    }

    /// Color of edge `e`: the shared endpoint color, else the base color
    ///
    /// # Panics
    /// Panics if `e >= 32`.
    pub fn edge_color(&self, e: usize) -> Rgb {
        let edge = self.edges()[e];
        let (ca, cb) = (self.colors[edge.a], self.colors[edge.b]);
        if ca == cb {
            ca
        } else {
            self.settings.base_color
        }
    }

    // ==================== Rotation ====================

    /// Current rotation angle in [0, 2π)
    #[inline]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Add `step` radians to the rotation angle
    ///
    /// Zero pauses, negative reverses. Non-finite steps are ignored.
    pub fn advance_rotation(&mut self, step: f32) {
        if !step.is_finite() {
            log::warn!("Ignoring non-finite rotation step {}", step);
            return;
        }
        self.theta = (self.theta + step).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if self.theta >= TAU {
            self.theta = 0.0;
        }
        log::trace!("theta = {}", self.theta);
    }

    /// Advance by the configured rotation speed
    pub fn step_frame(&mut self) {
        self.advance_rotation(self.settings.rotation_speed);
    }

    /// Set the angle back to zero
    pub fn reset_rotation(&mut self) {
        log::debug!("Resetting rotation");
        self.theta = 0.0;
    }

    /// Active rotation planes
    #[inline]
    pub fn rotation_planes(&self) -> PlaneSet {
        self.settings.rotation_planes
    }

    /// Replace the active rotation planes with already-validated ones
    pub fn set_plane_set(&mut self, planes: PlaneSet) {
        log::debug!("Rotation planes set to {:?}", planes);
        self.settings.rotation_planes = planes;
    }

    /// Replace the active rotation planes with raw `(a, b)` axis pairs
    ///
    /// # Errors
    /// [`ModelError::InvalidRotationPlanes`] if an axis is outside `0..4`, a
    /// pair repeats an axis, or two pairs share an axis. The previous planes
    /// stay active.
    pub fn set_rotation_planes(&mut self, planes: &[(usize, usize)]) -> Result<(), ModelError> {
        let planes = PlaneSet::from_indices(planes)?;
        self.set_plane_set(planes);
        Ok(())
    }

    /// Radians per frame used by [`Self::step_frame`]
    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.settings.rotation_speed
    }

    /// Set the rotation step per frame
    pub fn set_rotation_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            log::warn!("Ignoring non-finite rotation speed {}", speed);
            return;
        }
        self.settings.rotation_speed = speed;
        if speed != 0.0 {
            self.resume_speed = speed;
        }
    }

    /// Whether the rotation speed is zero
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.settings.rotation_speed == 0.0
    }

    /// Pause, or resume at the last non-zero speed
    ///
    /// The restored speed keeps its sign, so a model last run backwards
    /// resumes backwards.
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            log::debug!("Resuming rotation at {}", self.resume_speed);
            self.settings.rotation_speed = self.resume_speed;
        } else {
            log::debug!("Pausing rotation");
            self.resume_speed = self.settings.rotation_speed;
            self.settings.rotation_speed = 0.0;
        }
    }

    // ==================== Projection ====================

    /// Active projection mode
    #[inline]
    pub fn projection(&self) -> ProjectionMode {
        self.settings.projection
    }

    /// Set the projection mode
    pub fn set_projection(&mut self, mode: ProjectionMode) {
        log::debug!("Projection set to {:?}", mode);
        self.settings.projection = mode;
    }

    /// Switch between orthographic and stereographic projection
    pub fn toggle_projection(&mut self) {
        self.set_projection(self.settings.projection.toggled());
    }

    /// Stereographic light position
    #[inline]
    pub fn light_position(&self) -> f32 {
        self.settings.light_position
    }

    /// Move the stereographic light
    ///
    /// # Errors
    /// [`ModelError::UnsafeLightPosition`] unless `light_position` is greater
    /// than the largest |w| any rotation can produce.
    pub fn set_light_position(&mut self, light_position: f32) -> Result<(), ModelError> {
        check_light_position(light_position, self.scale())?;
        log::debug!("Light position set to {}", light_position);
        self.settings.light_position = light_position;
        Ok(())
    }

    /// Suggested vertex marker scale for the active projection
    #[inline]
    pub fn marker_scale(&self) -> f32 {
        self.settings.projection.marker_scale(self.settings.light_position)
    }

    /// All view settings
    #[inline]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Vertex `i` rotated by the current angle, before projection
    ///
    /// # Panics
    /// Panics if `i >= 16`.
    #[inline]
    pub fn rotated_vertex(&self, i: usize) -> Vec4 {
        self.settings.rotation_planes.rotate(self.vertices()[i], self.theta)
    }

    /// Current 3D position of vertex `i`
    ///
    /// Depends only on the original vertex, the angle, the planes, the
    /// projection mode and the light position.
    ///
    /// # Panics
    /// Panics if `i >= 16`.
    pub fn project_vertex(&self, i: usize) -> [f32; 3] {
        self.settings
            .projection
            .project(self.rotated_vertex(i), self.settings.light_position)
    }

    /// Projected endpoints and derived color of edge `e`
    ///
    /// # Panics
    /// Panics if `e >= 32`.
    pub fn projected_edge(&self, e: usize) -> ProjectedEdge {
        let edge = self.edges()[e];
        ProjectedEdge {
            start: self.project_vertex(edge.a),
            end: self.project_vertex(edge.b),
            color: self.edge_color(e),
        }
    }

    /// Project every vertex and edge for the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut vertices = [ProjectedVertex::default(); VERTEX_COUNT];
        for (i, out) in vertices.iter_mut().enumerate() {
            *out = ProjectedVertex {
                position: self.project_vertex(i),
                color: self.colors[i],
            };
        }

        let mut edges = [ProjectedEdge::default(); EDGE_COUNT];
        for (e, (out, edge)) in edges.iter_mut().zip(self.edges()).enumerate() {
            *out = ProjectedEdge {
                start: vertices[edge.a].position,
                end: vertices[edge.b].position,
                color: self.edge_color(e),
            };
        }

        FrameSnapshot {
            theta: self.theta,
            projection: self.settings.projection,
            marker_scale: self.marker_scale(),
            vertices,
            edges,
        }
    }
}

impl Default for HypercubeModel {
    fn default() -> Self {
        let settings = ViewSettings::default();
        Self {
            shape: Tesseract4D::default(),
            colors: [settings.base_color; VERTEX_COUNT],
            highlighted: None,
            theta: 0.0,
            resume_speed: settings.rotation_speed,
            settings,
        }
    }
}

fn check_color(color: Rgb) -> Result<(), ModelError> {
    if color.is_valid() {
        Ok(())
    } else {
        Err(ModelError::InvalidColor(color))
    }
}

fn check_light_position(light_position: f32, scale: f32) -> Result<(), ModelError> {
    if is_safe_light_position(light_position, scale) {
        Ok(())
    } else {
        Err(ModelError::UnsafeLightPosition {
            light_position,
            min_exclusive: max_rotated_w(scale),
        })
    }
}
