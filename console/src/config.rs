//! Configuration shared by the console programs
//!
//! Loaded from an optional `config.toml` in the working directory.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConsoleError, Result};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Input handling settings
    #[serde(default)]
    pub input: InputConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level filter (default: "warn")
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Input configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputConfig {
    /// Cap on prompt cycles before giving up. Absent or 0 means no cap.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl InputConfig {
    /// Effective attempt cap, with 0 folded into "unbounded"
    pub fn attempt_limit(&self) -> Option<u32> {
        self.max_attempts.filter(|&n| n > 0)
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::ReadError(path.display().to_string(), e.to_string()))?;

        Self::parse(&content)
            .map_err(|e| ConsoleError::ParseError(path.display().to_string(), e.to_string()))
    }

    /// Load `config.toml`, falling back to defaults with a warning on stderr.
    ///
    /// Tracing isn't up yet when this runs, so the warning goes straight out.
    pub fn load_or_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_else(|e| {
            eprintln!("Warning: {}", e);
            Self::default()
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
