//! Core model for the tesseract viewer
//!
//! This crate provides the stateful side of the viewer:
//!
//! - [`HypercubeModel`] - tesseract topology plus colors, rotation angle and view settings
//! - [`ViewSettings`] - the mutable configuration owned by a model
//! - [`FrameSnapshot`] - projected vertices and edges for one frame
//! - [`ModelError`] - construction and setter validation errors

mod error;
mod model;
mod snapshot;

pub use error::ModelError;
pub use model::{
    HypercubeModel, ViewSettings, DEFAULT_LIGHT_POSITION, DEFAULT_ROTATION_SPEED, DEFAULT_SCALE,
};
pub use snapshot::{FrameSnapshot, ProjectedEdge, ProjectedVertex};

// Re-export commonly used types from tesseract_math for convenience
pub use tesseract_math::{
    AxisPair, CubeFace, Edge, PlaneSet, PlaneSetError, ProjectionMode, Rgb, RotationPlane, Vec4,
    EDGE_COUNT, VERTEX_COUNT,
};
