//! Host configuration.
//!
//! Read from the JSON file named by `ENGINE_CONFIG`. Missing keys take their
//! defaults, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use engine_ecs::EcsConfig;
use serde::{Deserialize, Serialize};

use crate::tick::TickConfig;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "ENGINE_CONFIG";

/// Everything the host binary can be configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tick loop timing.
    pub tick: TickConfig,
    /// World storage policy.
    pub ecs: EcsConfig,
}

impl AppConfig {
    /// Load the file named by [`CONFIG_ENV`], or the defaults if it is unset.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration JSON.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{ "tick": { "max_ticks": 120 }, "ecs": { "columns": { "initial_capacity": 32 } } }"#,
        )
        .unwrap();
        assert_eq!(config.tick.max_ticks, 120);
        assert!((config.tick.tick_rate - 60.0).abs() < f64::EPSILON);
        assert_eq!(config.ecs.columns.initial_capacity, 32);
        assert!((config.ecs.columns.growth_factor - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppConfig::from_json(r#"{ "tick": { "tick_rate": "fast" } }"#).is_err());
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir()
            .join(format!("engine_app_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "tick": { "tick_rate": 30.0 } }"#).unwrap();
        let config = AppConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!((config.tick.tick_rate - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_is_error() {
        let error = AppConfig::from_file(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(error.to_string().contains("failed to read config file"));
    }
}
