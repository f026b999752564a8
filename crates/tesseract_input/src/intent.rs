//! UI intents and their model mutations
//!
//! Each [`ControlIntent`] is one discrete UI event (a button press, a menu
//! selection) and maps to exactly one mutation of a [`HypercubeModel`].

use serde::{Deserialize, Serialize};
use tesseract_core::{CubeFace, HypercubeModel, ModelError, PlaneSet, RotationPlane};

/// Rotation plane choices offered by the plane menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanePreset {
    /// XW and YZ double rotation
    #[default]
    XwYz,
    /// YW and XZ double rotation
    YwXz,
    /// ZW and XY double rotation
    ZwXy,
    Xy,
    Xz,
    Xw,
    Yz,
    Yw,
    Zw,
}

impl PlanePreset {
    /// Menu order
    pub const ALL: [PlanePreset; 9] = [
        PlanePreset::XwYz,
        PlanePreset::YwXz,
        PlanePreset::ZwXy,
        PlanePreset::Xy,
        PlanePreset::Xz,
        PlanePreset::Xw,
        PlanePreset::Yz,
        PlanePreset::Yw,
        PlanePreset::Zw,
    ];

    /// The planes this preset rotates
    pub fn plane_set(self) -> PlaneSet {
        use RotationPlane::*;
        let double = |a, b| PlaneSet::double(a, b).unwrap_or_else(|_| PlaneSet::single(a));
        match self {
            PlanePreset::XwYz => double(XW, YZ),
            PlanePreset::YwXz => double(YW, XZ),
            PlanePreset::ZwXy => double(ZW, XY),
            PlanePreset::Xy => PlaneSet::single(XY),
            PlanePreset::Xz => PlaneSet::single(XZ),
            PlanePreset::Xw => PlaneSet::single(XW),
            PlanePreset::Yz => PlaneSet::single(YZ),
            PlanePreset::Yw => PlaneSet::single(YW),
            PlanePreset::Zw => PlaneSet::single(ZW),
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            PlanePreset::XwYz => "XW & YZ",
            PlanePreset::YwXz => "YW & XZ",
            PlanePreset::ZwXy => "ZW & XY",
            PlanePreset::Xy => "XY",
            PlanePreset::Xz => "XZ",
            PlanePreset::Xw => "XW",
            PlanePreset::Yz => "YZ",
            PlanePreset::Yw => "YW",
            PlanePreset::Zw => "ZW",
        }
    }
}

/// Stereographic light distances offered by the light menu
///
/// All are safe for a unit tesseract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightPreset {
    Near,
    Close,
    Standard,
    Far,
    Distant,
}

impl LightPreset {
    /// Menu order
    pub const ALL: [LightPreset; 5] = [
        LightPreset::Near,
        LightPreset::Close,
        LightPreset::Standard,
        LightPreset::Far,
        LightPreset::Distant,
    ];

    /// Distance along w for a unit tesseract
    pub fn distance(self) -> f32 {
        match self {
            LightPreset::Near => 1.5,
            LightPreset::Close => 1.75,
            LightPreset::Standard => 2.0,
            LightPreset::Far => 3.0,
            LightPreset::Distant => 5.0,
        }
    }
}

/// A discrete request from the UI layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlIntent {
    /// Stop the rotation, or resume it
    TogglePause,
    /// Set the rotation angle back to zero
    ResetRotation,
    /// Color one cell with the configured highlight color
    HighlightCube(CubeFace),
    /// Back to the base color everywhere
    ClearHighlight,
    /// Choose the rotation planes
    SelectPlanes(PlanePreset),
    /// Choose the stereographic light distance
    SelectLightPosition(LightPreset),
    /// Switch between orthographic and stereographic projection
    ToggleProjection,
}

impl ControlIntent {
    /// Apply this intent to `model`
    ///
    /// # Errors
    /// Only [`ControlIntent::SelectLightPosition`] can fail, when the preset
    /// distance is unsafe for a tesseract larger than the unit one. The model
    /// is left unchanged in that case.
    pub fn apply(self, model: &mut HypercubeModel) -> Result<(), ModelError> {
        log::debug!("Applying {:?}", self);
        match self {
            ControlIntent::TogglePause => model.toggle_pause(),
            ControlIntent::ResetRotation => model.reset_rotation(),
            ControlIntent::HighlightCube(face) => model.highlight_face(face),
            ControlIntent::ClearHighlight => model.clear_highlight(),
            ControlIntent::SelectPlanes(preset) => model.set_plane_set(preset.plane_set()),
            ControlIntent::SelectLightPosition(preset) => {
                model.set_light_position(preset.distance())?
            }
            ControlIntent::ToggleProjection => model.toggle_projection(),
        }
        Ok(())
    }
}
