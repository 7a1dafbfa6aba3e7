// src/core/config.rs
use std::env;
use std::fs;
use std::path::PathBuf;

use log::LevelFilter;
use thiserror::Error;

use crate::models::GenerationOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

// Configuration for the generator CLI
#[derive(Debug, Clone)]
pub struct Config {
    // Generation defaults, overridable by a saved profile and env vars
    pub defaults: GenerationOptions,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: GenerationOptions::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration: built-in defaults, then the saved profile,
    // then environment variable overrides
    pub fn load() -> Self {
        let mut config = Config::default();
        config.load_profile();
        config.apply_env();
        config
    }

    fn load_profile(&mut self) {
        let path = match profile_path() {
            Some(path) if path.exists() => path,
            _ => return,
        };

        let loaded = fs::read_to_string(&path)
            .map_err(ConfigError::from)
            .and_then(|raw| serde_json::from_str(&raw).map_err(ConfigError::from));

        match loaded {
            Ok(defaults) => self.defaults = defaults,
            Err(e) => log::warn!("Ignoring unreadable profile {}: {}", path.display(), e),
        }
    }

    fn apply_env(&mut self) {
        if let Ok(val) = env::var("PASSFORGE_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) => self.defaults.length = length,
                Err(_) => log::warn!(
                    "Invalid PASSFORGE_DEFAULT_LENGTH '{}', keeping {}",
                    val,
                    self.defaults.length
                ),
            }
        }

        if let Ok(val) = env::var("PASSFORGE_LOG_LEVEL") {
            match val.to_lowercase().as_str() {
                "trace" => self.log_level = LevelFilter::Trace,
                "debug" => self.log_level = LevelFilter::Debug,
                "info" => self.log_level = LevelFilter::Info,
                "warn" => self.log_level = LevelFilter::Warn,
                "error" => self.log_level = LevelFilter::Error,
                "off" => self.log_level = LevelFilter::Off,
                _ => log::warn!("Unknown log level '{}', using {}", val, self.log_level),
            }
        }
    }

    // Persist generation options as the default profile
    pub fn save_defaults(options: &GenerationOptions) -> Result<PathBuf, ConfigError> {
        let path = profile_path().ok_or(ConfigError::NoConfigDir)?;
        fs::write(&path, serde_json::to_string_pretty(options)?)?;
        Ok(path)
    }
}

fn profile_path() -> Option<PathBuf> {
    crate::utils::get_app_config_dir().map(|dir| dir.join("profile.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutations share process state, so everything lives in one test.
    #[test]
    fn env_overrides_apply_and_reject_garbage() {
        let mut config = Config::default();
        env::set_var("PASSFORGE_DEFAULT_LENGTH", "20");
        env::set_var("PASSFORGE_LOG_LEVEL", "debug");
        config.apply_env();
        assert_eq!(config.defaults.length, 20);
        assert_eq!(config.log_level, LevelFilter::Debug);

        let mut config = Config::default();
        env::set_var("PASSFORGE_DEFAULT_LENGTH", "not-a-number");
        env::set_var("PASSFORGE_LOG_LEVEL", "verbose");
        config.apply_env();
        assert_eq!(config.defaults.length, GenerationOptions::default().length);
        assert_eq!(config.log_level, LevelFilter::Info);

        env::remove_var("PASSFORGE_DEFAULT_LENGTH");
        env::remove_var("PASSFORGE_LOG_LEVEL");
    }
}
