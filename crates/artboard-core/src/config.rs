//! Editor configuration supplied by the UI layer.
//!
//! Everything here has a default, and every section deserializes with
//! `#[serde(default)]`, so the UI only sends what it wants to override:
//!
//! ```text
//! { "filters": { "brightness": { "min": 50, "max": 150 } }, "zoom": { "min": 1, "max": 3 } }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{FilterBounds, FilterKind, FilterRange};
use crate::layer::{LayerDefaults, LayerError, LayerLimits};

/// Errors raised while loading configuration or a design document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured range is inverted or non-finite.
    #[error("Invalid range for {name}: min {min} must not exceed max {max}")]
    InvalidRange { name: &'static str, min: f64, max: f64 },

    /// The design violates a layer model invariant.
    #[error("Invalid design: {0}")]
    Layer(#[from] LayerError),
}

/// Default zoom slider range for image layers.
pub const DEFAULT_ZOOM_RANGE: FilterRange = FilterRange::new(0.1, 5.0);

/// Bounds and defaults the editor session enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub filters: FilterBounds,
    pub zoom: FilterRange,
    pub defaults: LayerDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            filters: FilterBounds::default(),
            zoom: DEFAULT_ZOOM_RANGE,
            defaults: LayerDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The filter and zoom ranges as layer value limits.
    pub fn limits(&self) -> LayerLimits {
        LayerLimits {
            filters: self.filters,
            zoom: self.zoom,
        }
    }

    /// Check that every range is finite and not inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = FilterKind::ALL
            .iter()
            .map(|&kind| (kind.attribute(), self.filters.range(kind)))
            .chain(std::iter::once(("zoom", self.zoom)));

        for (name, range) in ranges {
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange {
                    name,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
