// ABOUTME: Configuration management for the stencil CLI
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::walker::ParamTable;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default parameter table, merged under parameters supplied on the
    /// command line.
    #[serde(default)]
    pub parameters: ParamTable,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(p) if p.exists() => {
                let contents = std::fs::read_to_string(&p)?;
                serde_yaml::from_str(&contents)?
            }
            _ => Config::default(),
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("stencil.yaml"),
            PathBuf::from("stencil.yml"),
            PathBuf::from(".stencil.yaml"),
            PathBuf::from(".stencil.yml"),
        ];

        // Check current directory first
        for path in possible_paths {
            if path.exists() {
                return Some(path);
            }
        }

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".stencil").join("config.yaml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("STENCIL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STENCIL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Merge additional parameters over the configured defaults
    pub fn merge_parameters(&mut self, params: ParamTable) {
        for (key, value) in params {
            self.parameters.insert(key, value);
        }
    }
}
