//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TESSERACT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tesseract_core::{
    HypercubeModel, ModelError, ProjectionMode, Rgb, ViewSettings, DEFAULT_LIGHT_POSITION,
    DEFAULT_ROTATION_SPEED, DEFAULT_SCALE,
};
use tesseract_input::PlanePreset;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tesseract geometry and view settings
    #[serde(default)]
    pub model: ModelConfig,
    /// Frame driver configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TESSERACT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TESSERACT_MODEL__SCALE=2 -> model.scale = 2
        figment = figment.merge(Env::prefixed("TESSERACT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build a model from the `[model]` and `[animation]` sections
    pub fn build_model(&self) -> Result<HypercubeModel, ModelError> {
        let settings = self.model.to_view_settings(self.animation.rotation_speed);
        let mut model = HypercubeModel::from_settings(self.model.scale, settings)?;

        if self.animation.paused {
            model.toggle_pause();
        }
        if let Some(index) = self.model.highlight {
            model.highlight_cube(index, self.model.highlight_color)?;
        }
        Ok(model)
    }
}

/// Tesseract configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Coordinate magnitude of every vertex
    pub scale: f32,
    /// Color of unhighlighted vertices [r, g, b]
    pub base_color: Rgb,
    /// Color of the highlighted cell [r, g, b]
    pub highlight_color: Rgb,
    /// Stereographic light distance along w
    pub light_position: f32,
    /// "orthographic" or "stereographic"
    pub projection: ProjectionMode,
    /// Rotation plane preset, e.g. "xw_yz" or "zw"
    pub rotation_planes: PlanePreset,
    /// Cell to highlight at startup (0-7)
    pub highlight: Option<usize>,
}

impl ModelConfig {
    /// Convert to the model's view settings
    pub fn to_view_settings(&self, rotation_speed: f32) -> ViewSettings {
        ViewSettings {
            rotation_planes: self.rotation_planes.plane_set(),
            projection: self.projection,
            light_position: self.light_position,
            rotation_speed,
            base_color: self.base_color,
            highlight_color: self.highlight_color,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            base_color: Rgb::RED,
            highlight_color: Rgb::GREEN,
            light_position: DEFAULT_LIGHT_POSITION,
            projection: ProjectionMode::Stereographic,
            rotation_planes: PlanePreset::XwYz,
            highlight: None,
        }
    }
}

/// Frame driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rotation step per frame in radians
    pub rotation_speed: f32,
    /// Start paused
    pub paused: bool,
    /// Frames to run in headless mode
    pub frames: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            paused: false,
            frames: 630,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Print a frame every N frames (0 = final frame only)
    pub dump_every: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_every: 0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.model.scale, 1.0);
        assert_eq!(config.model.light_position, 2.0);
        assert_eq!(config.animation.rotation_speed, 0.01);
        assert_eq!(config.model.projection, ProjectionMode::Stereographic);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("light_position"));
        assert!(toml.contains("projection = \"stereographic\""));
        assert!(toml.contains("rotation_planes = \"xw_yz\""));
    }

    #[test]
    fn test_config_parses_sections() {
        let source = r#"
            [model]
            scale = 0.5
            base_color = [0.0, 0.0, 1.0]
            projection = "orthographic"
            rotation_planes = "zw_xy"
            highlight = 4

            [animation]
            rotation_speed = -0.02
        "#;
        let config: AppConfig = toml::from_str(source).unwrap();
        assert_eq!(config.model.scale, 0.5);
        assert_eq!(config.model.base_color, Rgb::BLUE);
        assert_eq!(config.model.projection, ProjectionMode::Orthographic);
        assert_eq!(config.model.rotation_planes, PlanePreset::ZwXy);
        assert_eq!(config.model.highlight, Some(4));
        // Unspecified keys keep their defaults
        assert_eq!(config.model.highlight_color, Rgb::GREEN);
        assert_eq!(config.animation.rotation_speed, -0.02);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_build_default_model() {
        let model = AppConfig::default().build_model().unwrap();
        assert_eq!(model.settings(), HypercubeModel::default().settings());
        assert_eq!(model.highlighted_face(), None);
    }

    #[test]
    fn test_build_model_applies_startup_state() {
        let mut config = AppConfig::default();
        config.model.highlight = Some(2);
        config.animation.paused = true;

        let model = config.build_model().unwrap();
        assert!(model.is_paused());
        assert_eq!(model.highlighted_face().map(|f| f.index()), Some(2));
    }

    #[test]
    fn test_build_model_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.model.scale = 0.0;
        assert!(matches!(config.build_model(), Err(ModelError::InvalidScale(_))));

        let mut config = AppConfig::default();
        config.model.light_position = 1.0;
        assert!(matches!(config.build_model(), Err(ModelError::UnsafeLightPosition { .. })));

        let mut config = AppConfig::default();
        config.model.highlight = Some(8);
        assert_eq!(config.build_model().unwrap_err(), ModelError::InvalidCubeFace(8));
    }

    #[test]
    fn test_build_model_rejects_out_of_range_colors() {
        let source = r#"
            [model]
            base_color = [2.0, -1.0, 0.0]
        "#;
        let config: AppConfig = toml::from_str(source).unwrap();
        assert_eq!(
            config.build_model().unwrap_err(),
            ModelError::InvalidColor(Rgb::new(2.0, -1.0, 0.0))
        );

        let source = r#"
            [model]
            highlight_color = [0.0, 1.5, 0.0]
        "#;
        let config: AppConfig = toml::from_str(source).unwrap();
        assert!(matches!(config.build_model(), Err(ModelError::InvalidColor(_))));
    }
}
