//! Layout defaults
//!
//! Default distances used by [`crate::LayoutEngine`] when a caller does not
//! supply them. Stored as JSON; every distance is in EMU.

use crate::geometry::{Gutter, Padding};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use slide_model::inches;
use std::path::Path;

/// Layout engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum spacing between distributed elements
    pub min_gap: i64,
    /// Padding kept from both ends when distributing inside an anchor
    pub anchor_padding: i64,
    /// Padding between an anchor's edges and a grid
    pub grid_padding: Padding,
    /// Spacing between grid cells
    pub grid_gutter: Gutter,
    /// Gutter a grid falls back to when it would overflow its anchor
    pub min_gutter: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_gap: inches(0.2),
            anchor_padding: inches(0.2),
            grid_padding: Padding::uniform(inches(0.1)),
            grid_gutter: Gutter::uniform(inches(0.1)),
            min_gutter: inches(0.1),
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON document; absent fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from disk, or return defaults if the file doesn't exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No layout config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_gap <= 0 {
            return Err(LayoutError::Config(format!(
                "min_gap must be positive, got {}",
                self.min_gap
            )));
        }
        if self.min_gutter <= 0 {
            return Err(LayoutError::Config(format!(
                "min_gutter must be positive, got {}",
                self.min_gutter
            )));
        }
        if self.anchor_padding < 0 || !self.grid_padding.is_non_negative() {
            return Err(LayoutError::Config("padding must not be negative".to_string()));
        }
        if self.grid_gutter.horizontal < 0 || self.grid_gutter.vertical < 0 {
            return Err(LayoutError::Config("grid gutter must not be negative".to_string()));
        }
        Ok(())
    }
}
