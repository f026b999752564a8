//! 4D Mathematics Library
//!
//! This crate provides the pure geometry behind the tesseract viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Rgb`] - linear RGB color
//! - [`RotationPlane`], [`AxisPair`], [`PlaneSet`] - plane rotations, including double rotations
//! - [`ProjectionMode`] - orthographic or stereographic 4D to 3D projection
//!
//! ## Shape Types
//!
//! - [`Tesseract4D`] - fixed 16-vertex, 32-edge hypercube topology
//! - [`Edge`] - an edge between two vertex indices
//! - [`CubeFace`] - one of the 8 cubic cells

mod vec4;
mod color;
pub mod rotation;
pub mod projection;
pub mod tesseract;

pub use vec4::{Vec4, AXIS_COUNT};
pub use color::Rgb;
pub use rotation::{AxisPair, PlaneSet, PlaneSetError, RotationPlane};
pub use projection::{ProjectionMode, is_safe_light_position, max_rotated_w};
pub use tesseract::{CubeFace, Edge, Tesseract4D, CELL_COUNT, EDGE_COUNT, VERTEX_COUNT};
