//! Configuration management
//!
//! Configuration is read from a TOML file. Every section is optional and
//! falls back to its defaults:
//!
//! ```toml
//! [log]
//! level = "debug"
//! format = "json"
//!
//! [display]
//! mode = "raw"
//! markers = true
//! max_width = 120
//!
//! [cli]
//! pretty_json = true
//! max_steps = 100000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::DisplayConfig;
use crate::error::ConfigError;
use crate::logging::{LogConfig, LogLevel};

/// Environment variable naming a config file to load.
pub const CONFIG_ENV_VAR: &str = "TREEZIP_CONFIG";

/// Settings for the `tz` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    /// Stop a walk after this many pre-order positions.
    pub max_steps: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            max_steps: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub display: DisplayConfig,
    pub cli: CliConfig,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else the file named by `TREEZIP_CONFIG`, else
    /// the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log.level",
                reason: "must not be empty".to_string(),
            });
        }
        if let Err(reason) = self.log.level.parse::<LogLevel>() {
            return Err(ConfigError::Invalid {
                field: "log.level",
                reason,
            });
        }
        if self.display.max_width == Some(0) {
            return Err(ConfigError::Invalid {
                field: "display.max_width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.cli.max_steps == Some(0) {
            return Err(ConfigError::Invalid {
                field: "cli.max_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
