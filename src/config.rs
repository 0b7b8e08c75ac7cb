//! Strip configuration
//!
//! Construction-time options. The pixel count is never configured here: it
//! always comes from the sink the strip drives.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StripError};

/// Number of layers when none is configured
pub const DEFAULT_LAYER_COUNT: usize = 4;

/// Options fixed when a strip is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Number of addressable layers
    pub layer_count: usize,
    /// Layer written by `set` calls that don't name one
    pub default_layer: usize,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LAYER_COUNT,
            default_layer: 0,
        }
    }
}

impl StripConfig {
    /// Config with `layer_count` layers and the topmost as default
    pub fn with_layers(layer_count: usize) -> Self {
        Self {
            layer_count,
            ..Self::default()
        }
    }

    /// Check the config describes a usable strip
    pub fn validate(&self) -> Result<()> {
        if self.layer_count == 0 {
            return Err(StripError::InvalidConfig {
                reason: "layer_count must be at least 1".to_string(),
            });
        }
        if self.default_layer >= self.layer_count {
            return Err(StripError::InvalidConfig {
                reason: format!(
                    "default_layer {} does not exist with {} layers",
                    self.default_layer, self.layer_count
                ),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StripConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
