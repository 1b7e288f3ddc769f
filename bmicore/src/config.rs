//! Dashboard configuration
//!
//! Presentation timings only. Read from `config.json` in the platform config
//! directory if present; the dashboard never writes it and never persists
//! history.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chart::trace::DEFAULT_TRACE_SPEED;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Milliseconds between background color changes
    pub background_interval_ms: u64,
    /// Cycle the background at all
    pub animate_background: bool,
    /// Milliseconds per chart tracing tick
    pub trace_tick_ms: u64,
    /// Pixels traced per tick
    pub trace_speed: f32,
    /// Milliseconds per result bar tick
    pub bar_tick_ms: u64,
    /// Pixels the bar grows per tick
    pub bar_step: f32,
    /// Bar pixels per BMI point
    pub bar_scale: f32,
    pub bar_max_width: f32,
    /// Milliseconds per emoji bounce step
    pub bounce_step_ms: u64,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            background_interval_ms: 800,
            animate_background: true,
            trace_tick_ms: 10,
            trace_speed: DEFAULT_TRACE_SPEED,
            bar_tick_ms: 7,
            bar_step: 5.0,
            bar_scale: 12.0,
            bar_max_width: 300.0,
            bounce_step_ms: 80,
        }
    }
}

impl DashConfig {
    pub fn config_path() -> PathBuf {
        config_dir().join("config.json")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load the user's config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Platform config directory for the dashboard.
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("co", "bmidash", "bmidash")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashConfig::from_json(r#"{ "trace_speed": 4.0, "animate_background": false }"#).unwrap();
        assert_eq!(config.trace_speed, 4.0);
        assert!(!config.animate_background);
        assert_eq!(config.background_interval_ms, 800);
        assert_eq!(config.bar_max_width, 300.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DashConfig::from_json("{}").unwrap(), DashConfig::default());
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(DashConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("bmidash-config-that-does-not-exist.json");
        assert!(matches!(DashConfig::load_from(&path), Err(ConfigError::Io(_))));
    }
}
