//! Keyboard mapping from raw key events to control intents
//!
//! Layout:
//! - Space: pause / resume
//! - R: reset rotation
//! - P: toggle projection
//! - 1-8: highlight cell 0-7, 0: clear highlight
//! - F1-F9: rotation plane presets in menu order
//! - Z/X/C/V/B: light presets, nearest to farthest

use tesseract_core::CubeFace;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::intent::{ControlIntent, LightPreset, PlanePreset};

const CELL_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

const PLANE_KEYS: [KeyCode; 9] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
    KeyCode::F9,
];

const LIGHT_KEYS: [KeyCode; 5] = [
    KeyCode::KeyZ,
    KeyCode::KeyX,
    KeyCode::KeyC,
    KeyCode::KeyV,
    KeyCode::KeyB,
];

/// Maps raw keyboard events to [`ControlIntent`]s
pub struct IntentMapper;

impl IntentMapper {
    /// Map keyboard input to an intent
    ///
    /// Returns `None` for key releases and unbound keys.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<ControlIntent> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(ControlIntent::TogglePause),
            KeyCode::KeyR => Some(ControlIntent::ResetRotation),
            KeyCode::KeyP => Some(ControlIntent::ToggleProjection),
            KeyCode::Digit0 => Some(ControlIntent::ClearHighlight),
            _ => Self::map_indexed(key),
        }
    }

    fn map_indexed(key: KeyCode) -> Option<ControlIntent> {
        if let Some(i) = CELL_KEYS.iter().position(|&k| k == key) {
            return CubeFace::new(i).map(ControlIntent::HighlightCube);
        }
        if let Some(i) = PLANE_KEYS.iter().position(|&k| k == key) {
            return Some(ControlIntent::SelectPlanes(PlanePreset::ALL[i]));
        }
        LIGHT_KEYS
            .iter()
            .position(|&k| k == key)
            .map(|i| ControlIntent::SelectLightPosition(LightPreset::ALL[i]))
    }
}
