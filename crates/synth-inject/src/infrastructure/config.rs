//! TOML configuration for the injection pipeline.
//!
//! ```toml
//! [logging]
//! filter = "synth_inject=debug,info"
//!
//! [screen]
//! fixed_width = 1920
//! fixed_height = 1080
//! ```
//!
//! Every section and field is optional.  An empty file (or no file) yields
//! [`SynthConfig::default`]: `info` logging and live screen metrics from the OS.
//!
//! `[screen]` pins the extent used for pointer normalization.  It is meant for
//! headless hosts and recorded-session replay where the OS query is missing or
//! describes a different display than the one the events were captured on.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use synth_core::FixedScreenMetrics;
use thiserror::Error;

/// Error type for configuration and logging bootstrap.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A global tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub logging: LoggingConfig,
    pub screen: ScreenConfig,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` `EnvFilter` directive.  `RUST_LOG` overrides it.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// `[screen]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub fixed_width: Option<i32>,
    pub fixed_height: Option<i32>,
}

impl ScreenConfig {
    /// The configured fixed size, if both dimensions are present.
    pub fn fixed(&self) -> Option<FixedScreenMetrics> {
        match (self.fixed_width, self.fixed_height) {
            (Some(width), Some(height)) => Some(FixedScreenMetrics::new(width, height)),
            _ => None,
        }
    }
}

impl SynthConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or wrongly typed fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The fixed screen extent from `[screen]`, if both dimensions are set.
    pub fn screen_override(&self) -> Option<FixedScreenMetrics> {
        self.screen.fixed()
    }
}
