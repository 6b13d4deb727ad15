//! Numeric limits on layer values.
//!
//! The same checks run on every path a value can take into a design: a
//! [`LayerPatch`](super::LayerPatch) merge, a layer added by the caller, and
//! a design loaded from JSON.

use super::types::{Layer, LayerError, LayerKind};
use crate::config::DEFAULT_ZOOM_RANGE;
use crate::filter::{FilterBounds, FilterKind, FilterRange};
use crate::transform::normalize_rotation;

/// Ranges that filter and zoom values must fall within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerLimits {
    pub filters: FilterBounds,
    pub zoom: FilterRange,
}

impl Default for LayerLimits {
    fn default() -> Self {
        Self {
            filters: FilterBounds::default(),
            zoom: DEFAULT_ZOOM_RANGE,
        }
    }
}

impl LayerLimits {
    /// Check a complete layer record and return it with rotation normalized.
    ///
    /// # Errors
    ///
    /// `InvalidValue` for the first attribute that is non-finite, negative
    /// where a size is expected, or outside its configured range.
    pub fn conform(&self, layer: &Layer) -> Result<Layer, LayerError> {
        let mut next = layer.clone();

        let base = &mut next.base;
        finite("x", base.x)?;
        finite("y", base.y)?;
        non_negative("width", base.width)?;
        non_negative("height", base.height)?;
        base.rotation = normalize_rotation(finite("rotation", base.rotation)?);

        unit_interval("opacity", next.opacity())?;

        match &next.kind {
            LayerKind::Image(image) => {
                within("zoom", image.zoom, self.zoom)?;
                for kind in FilterKind::ALL {
                    within(kind.attribute(), image.filters.get(kind), self.filters.range(kind))?;
                }
            }
            LayerKind::Text(text) => {
                non_negative("fontSize", text.font_size)?;
            }
            LayerKind::Shape(shape) => {
                if let Some(width) = shape.stroke_width {
                    non_negative("strokeWidth", width)?;
                }
            }
        }

        Ok(next)
    }
}

pub(super) fn finite(attribute: &'static str, value: f64) -> Result<f64, LayerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayerError::InvalidValue {
            attribute,
            reason: format!("expected a finite number, got {value}"),
        })
    }
}

pub(super) fn non_negative(attribute: &'static str, value: f64) -> Result<f64, LayerError> {
    let value = finite(attribute, value)?;
    if value < 0.0 {
        return Err(LayerError::InvalidValue {
            attribute,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(value)
}

pub(super) fn unit_interval(attribute: &'static str, value: f64) -> Result<f64, LayerError> {
    within(attribute, value, FilterRange::new(0.0, 1.0))
}

pub(super) fn within(
    attribute: &'static str,
    value: f64,
    range: FilterRange,
) -> Result<f64, LayerError> {
    let value = finite(attribute, value)?;
    if !range.contains(value) {
        return Err(LayerError::InvalidValue {
            attribute,
            reason: format!("must be between {} and {}, got {value}", range.min, range.max),
        });
    }
    Ok(value)
}
