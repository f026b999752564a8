//! Per-frame output handed to a rendering backend
//!
//! A [`FrameSnapshot`] is plain `Copy` data computed in one pass, so a
//! renderer running on another thread can read a frame-consistent copy
//! while the model moves on to the next frame.

use bytemuck::{Pod, Zeroable};
use tesseract_math::{ProjectionMode, Rgb, EDGE_COUNT, VERTEX_COUNT};

/// A projected vertex, laid out for direct upload as a vertex buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ProjectedVertex {
    /// 3D position
    pub position: [f32; 3],
    /// Vertex color
    pub color: Rgb,
}

/// A projected edge with its derived color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ProjectedEdge {
    pub start: [f32; 3],
    pub end: [f32; 3],
    /// Shared endpoint color, or the base color when endpoints differ
    pub color: Rgb,
}

/// Everything a renderer needs for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    /// Rotation angle the frame was computed at
    pub theta: f32,
    /// Projection used for the positions
    pub projection: ProjectionMode,
    /// Suggested vertex marker scale for this projection
    pub marker_scale: f32,
    pub vertices: [ProjectedVertex; VERTEX_COUNT],
    pub edges: [ProjectedEdge; EDGE_COUNT],
}

impl FrameSnapshot {
    /// Vertex data as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices[..])
    }

    /// Edge data as raw bytes
    pub fn edge_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges[..])
    }

    /// Line-list vertices: two [`ProjectedVertex`] per edge, both carrying the edge color
    pub fn edge_line_list(&self) -> Vec<ProjectedVertex> {
        self.edges
            .iter()
            .flat_map(|e| {
                [
                    ProjectedVertex { position: e.start, color: e.color },
                    ProjectedVertex { position: e.end, color: e.color },
                ]
            })
            .collect()
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            theta: 0.0,
            projection: ProjectionMode::default(),
            marker_scale: 1.0,
            vertices: [ProjectedVertex::default(); VERTEX_COUNT],
            edges: [ProjectedEdge::default(); EDGE_COUNT],
        }
    }
}
