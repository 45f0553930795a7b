// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LoggingConfig;
use crate::watermark::config::{WatermarkConfig, WatermarkSettings};
use crate::watermark::WatermarkError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub watermark: WatermarkSettings,
}

/// Where source images live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// Directory requested image paths are resolved below. When unset,
    /// paths are taken relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                )
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        // An empty file is a valid, all-defaults configuration
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&substituted).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.watermark.validate()?;

        if let Some(root) = &self.shortener.root {
            if !root.is_dir() {
                return Err(format!(
                    "Image root '{}' is not a directory",
                    root.display()
                ));
            }
        }

        Ok(())
    }

    /// Resolved, immutable watermark configuration.
    pub fn watermark_config(&self) -> Result<WatermarkConfig, WatermarkError> {
        WatermarkConfig::from_settings(&self.watermark)
    }
}
