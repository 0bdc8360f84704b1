//! Configuration for the roleset tooling
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `ROLESET_*` environment variables.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roleset";

/// Prefix for environment overrides (`ROLESET_LOG_LEVEL`, ...)
pub const ENV_PREFIX: &str = "ROLESET";

/// Global configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format for reports
    #[serde(default)]
    pub output: OutputFormat,

    /// Default ranking direction
    #[serde(default)]
    pub reverse: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            reverse: false,
        }
    }
}

impl Config {
    /// Load from `roleset.toml` (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit file, which must exist, or fall back to
    /// the optional default file.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let builder = config::Config::builder()
            .set_default("log_level", default_log_level())?
            .set_default("output", "text")?
            .set_default("reverse", false)?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config: Config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(Error::InvalidConfig("log_level cannot be empty".into()));
        }
        Ok(())
    }
}
