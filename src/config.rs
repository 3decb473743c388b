//! TOML configuration for the demo.
//!
//! ```toml
//! children = 2
//! children_color = "#FFF"
//! seed = 42
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::parent::DEFAULT_CHILDREN;
use crate::Color;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML (including malformed colors)
    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many children the parent renders.
    pub children: usize,
    /// Color children show before the first click.
    pub children_color: Color,
    /// Seed for reproducible colors; random when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            children: DEFAULT_CHILDREN,
            children_color: Color::default(),
            seed: None,
        }
    }
}

/// Values given on the command line. `None` keeps the file's value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub children: Option<usize>,
    pub children_color: Option<Color>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Layer `overrides` on top and validate the result.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(children) = overrides.children {
            self.children = children;
        }
        if let Some(color) = overrides.children_color {
            self.children_color = color;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.children == 0 {
            return Err(ConfigError::Invalid(
                "children must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
