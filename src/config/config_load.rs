// src/config/config_load.rs
//
// loading config.toml

use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;

const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Animation step must be a positive number, got {0}")]
    InvalidStep(f32),
    #[error("Window size must be non-zero, got {width}x{height}")]
    InvalidWindow { width: u32, height: u32 },
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
    pub construction: ConstructionConfig,
    pub frame_recorder: FrameRecorderConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates: Vec<PathBuf> = [
            Self::exe_dir().map(|dir| dir.join(CONFIG_FILE)),
            Some(PathBuf::from(CONFIG_FILE)),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first_existing(&candidates)
    }

    /// Loads the first of `candidates` that exists, or defaults if none do.
    pub fn load_first_existing(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in candidates {
            if path.exists() {
                info!("Loading config from {}", path.display());
                return Self::load_from_path(path);
            }
        }

        warn!("No {} found, using default settings", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.animation.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }
        Ok(())
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        let output_dir = &self.frame_recorder.output_directory;
        if Path::new(output_dir).is_absolute() {
            PathBuf::from(output_dir)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            Self::exe_dir()
                .map(|exe_dir| exe_dir.join(output_dir))
                .unwrap_or_else(|| PathBuf::from(output_dir))
        }
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }
}
