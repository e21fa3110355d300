use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "FINGERPONG_CONFIG";
/// Config file read when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/fingerpong.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse { path: String, message: String },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read {path}: {message}"),
            Self::Parse { path, message } => write!(f, "failed to parse {path}: {message}"),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Arena dimensions in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 500.0,
        }
    }
}

/// Initial ball state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Horizontal velocity (pixels/tick).
    pub dx: f32,
    /// Vertical velocity (pixels/tick).
    pub dy: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            x: 320.0,
            y: 240.0,
            radius: 10.0,
            dx: 2.0,
            dy: 2.0,
        }
    }
}

/// Presentation options for the per-frame scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Reflect the scene horizontally before handing it to the renderer.
    pub mirror: bool,
    pub hand_point_radius: f32,
    pub line_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            hand_point_radius: 5.0,
            line_width: 2.0,
        }
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub render: RenderConfig,
}

impl PaddleConfig {
    /// Load config from `FINGERPONG_CONFIG` or `config/fingerpong.toml`.
    /// Falls back to defaults if the file is missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match Self::from_path(&path) {
            Ok(cfg) => {
                tracing::info!("Loaded configuration from {path}");
                cfg
            },
            Err(ConfigError::Io { .. }) => {
                tracing::info!("No {path} found, using defaults");
                Self::default()
            },
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            },
        }
    }

    /// Read and parse a TOML config file without falling back.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("ball.x", self.ball.x),
            ("ball.y", self.ball.y),
            ("ball.radius", self.ball.radius),
            ("ball.dx", self.ball.dx),
            ("ball.dy", self.ball.dy),
            ("render.hand_point_radius", self.render.hand_point_radius),
            ("render.line_width", self.render.line_width),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ConfigError::Invalid(
                "arena dimensions must be > 0".to_string(),
            ));
        }
        if self.ball.radius <= 0.0 {
            return Err(ConfigError::Invalid("ball.radius must be > 0".to_string()));
        }
        if self.ball.x < 0.0
            || self.ball.x > self.arena.width
            || self.ball.y < 0.0
            || self.ball.y > self.arena.height
        {
            tracing::warn!(
                x = self.ball.x,
                y = self.ball.y,
                "Initial ball position lies outside the arena"
            );
        }
        Ok(())
    }
}
