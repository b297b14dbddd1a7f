// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AnalyzerError, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "LOG_SENTINEL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_analyzer: LogAnalyzerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogAnalyzerConfig {
    /// `LogAnalyzer:LogFilePath`. Blank or absent classifies every run as not found.
    #[serde(default)]
    pub log_file_path: Option<String>,
    /// `LogAnalyzer:IntervalSeconds`
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
    #[serde(default = "default_retry_delay_seconds")]
    pub retry_delay_seconds: u64,
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

fn default_interval_seconds() -> u64 {
    30
}

fn default_retry_delay_seconds() -> u64 {
    10
}

fn default_preview_lines() -> usize {
    5
}

impl Default for LogAnalyzerConfig {
    fn default() -> Self {
        Self {
            log_file_path: None,
            interval_seconds: default_interval_seconds(),
            retry_delay_seconds: default_retry_delay_seconds(),
            preview_lines: default_preview_lines(),
        }
    }
}

impl LogAnalyzerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    /// Configured path with surrounding whitespace removed, or `None` when blank.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.log_file_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            log_analyzer: LogAnalyzerConfig::default(),
        }
    }

    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log_analyzer.log_file_path = Some(path.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.log_analyzer.interval_seconds == 0 {
            return Err(AnalyzerError::Config(
                "interval_seconds must be greater than 0".to_string(),
            ));
        }

        if self.log_analyzer.retry_delay_seconds == 0 {
            return Err(AnalyzerError::Config(
                "retry_delay_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
