//! Rendering configuration
//!
//! [`RenderConfig`] can be built in code or loaded from a TOML file. Missing
//! keys fall back to the defaults.
//!
//! ```toml
//! scale = 0.5
//! check_references = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{GspnError, Result};

/// Factor applied to every source coordinate before emission
pub const DEFAULT_SCALE: f64 = 0.5;

/// Options controlling the drawing output
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Coordinate scale factor
    pub scale: f64,
    /// Resolve every arc endpoint before writing anything
    pub check_references: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            check_references: true,
        }
    }
}

impl RenderConfig {
    pub fn new(scale: f64, check_references: bool) -> Self {
        Self {
            scale,
            check_references,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_check_references(mut self, check: bool) -> Self {
        self.check_references = check;
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RenderConfig =
            toml::from_str(content).map_err(|e| GspnError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Loading render configuration");
        let content = fs::read_to_string(path).map_err(|e| {
            GspnError::config_error(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GspnError::config_error(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
