//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CAT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use caterpillar_core::{
    Brush, CaterpillarParams, Color, ShapeKind, MAX_SEGMENT_COUNT,
    BODY_COLOR, PATTERN_COLOR, FACE_COLOR, EYE_COLOR, COLOR_PRESETS, DEFAULT_ROTATION_DEGREES,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Animation and scene rotation
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Figure appearance
    #[serde(default)]
    pub figure: FigureConfig,
    /// Initial brush for placed shapes
    #[serde(default)]
    pub brush: BrushConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
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
    /// 3. Environment variables (`CAT_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CAT_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("CAT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, followed by frame stats when those are shown
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Caterpillar".to_string(),
            width: 800,
            height: 800,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Start with the figure animating
    pub enabled: bool,
    /// Initial rotation about +Y in degrees
    pub rotation_angle: f32,
    /// Degrees per second while an arrow key is held
    pub rotation_speed: f32,
    /// Degrees per mouse wheel line
    pub scroll_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rotation_angle: DEFAULT_ROTATION_DEGREES,
            rotation_speed: 90.0,
            scroll_step: 5.0,
        }
    }
}

/// Figure configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Number of body segments, at most `MAX_SEGMENT_COUNT`
    pub segment_count: usize,
    pub body_color: Color,
    pub pattern_color: Color,
    pub face_color: Color,
    pub eye_color: Color,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            segment_count: 8,
            body_color: BODY_COLOR,
            pattern_color: PATTERN_COLOR,
            face_color: FACE_COLOR,
            eye_color: EYE_COLOR,
        }
    }
}

impl FigureConfig {
    /// Convert to the figure builder's parameters, clamping the segment count
    pub fn to_params(&self) -> CaterpillarParams {
        if self.segment_count > MAX_SEGMENT_COUNT {
            log::warn!(
                "figure.segment_count {} exceeds {}, clamping",
                self.segment_count, MAX_SEGMENT_COUNT
            );
        }
        CaterpillarParams {
            segment_count: self.segment_count.min(MAX_SEGMENT_COUNT),
            body_color: self.body_color,
            pattern_color: self.pattern_color,
            face_color: self.face_color,
            eye_color: self.eye_color,
        }
    }
}

/// Brush configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Primitive placed on click (point, triangle or circle)
    pub kind: ShapeKind,
    pub color: Color,
    /// Pixel size for points, `size / 200` NDC units otherwise
    pub size: f32,
    /// Circle segment count
    pub segments: u32,
    /// Size change per `[` / `]` press
    pub size_step: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            color: COLOR_PRESETS[0],
            size: 5.0,
            segments: 5,
            size_step: 1.0,
        }
    }
}

impl BrushConfig {
    /// Build the starting brush, clamping out-of-range values
    pub fn to_brush(&self) -> Brush {
        Brush::new(self.kind, self.color, self.size, self.segments)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl RenderingConfig {
    /// Background color as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let bg = &self.background_color;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show per-frame timing in the window title
    pub show_frame_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_frame_stats: true,
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
