//! Input handling for the tesseract viewer
//!
//! UI events become [`ControlIntent`] values, each applying one named
//! mutation to a `HypercubeModel`. [`IntentMapper`] provides a default
//! keyboard layout on top of winit key codes.

mod intent;
mod intent_mapper;

pub use intent::{ControlIntent, LightPreset, PlanePreset};
pub use intent_mapper::IntentMapper;
