//! Render configuration
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.
//! Every field is optional; missing fields keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::rasterizer::{DisplayMode, DEFAULT_HEIGHT, DEFAULT_THRESHOLD, DEFAULT_WIDTH, MAX_PIXELS};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG: &str = "shapecast.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for loading and rendering scripts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub display_mode: DisplayMode,
    pub threshold: f64,
    /// Used when a script's size header is unusable
    pub default_height: usize,
    pub default_width: usize,
    /// Where script names that are not paths are looked up
    pub script_dir: PathBuf,
    /// Pixel size of PNG exports
    pub png_scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Square,
            threshold: DEFAULT_THRESHOLD,
            default_height: DEFAULT_HEIGHT,
            default_width: DEFAULT_WIDTH,
            script_dir: PathBuf::from("scripts"),
            png_scale: 8,
        }
    }
}

impl RenderConfig {
    /// `(height, width)` fallback for scripts
    pub fn default_size(&self) -> (usize, usize) {
        (self.default_height, self.default_width)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        if self.default_height == 0 || self.default_width == 0 {
            return Err(ConfigError::ValidationError(format!(
                "default size must be positive, got {}x{}",
                self.default_height, self.default_width
            )));
        }
        let fits = self
            .default_height
            .checked_mul(self.default_width)
            .is_some_and(|pixels| pixels <= MAX_PIXELS);
        if !fits {
            return Err(ConfigError::ValidationError(format!(
                "default size {}x{} exceeds the {} pixel limit",
                self.default_height, self.default_width, MAX_PIXELS
            )));
        }
        if self.png_scale == 0 {
            return Err(ConfigError::ValidationError("png_scale must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse from a RON string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Per-user config file (`<config_dir>/shapecast/config.ron`)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapecast").join("config.ron"))
    }

    /// Resolve the active config.
    ///
    /// An explicit path must load. Otherwise the first existing file of
    /// `./shapecast.ron` and the per-user config is used, falling back to
    /// defaults when neither exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Loading config");
            return Self::load(path);
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG)).chain(Self::user_config_path());
        for path in candidates {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "Loading config");
                return Self::load(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}
