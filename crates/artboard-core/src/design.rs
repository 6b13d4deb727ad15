//! The design aggregate: canvas sizes plus the ordered layer sequence.
//!
//! Layer records are stored behind [`Arc`] so an update replaces only the
//! targeted record; every other layer keeps its allocation, and snapshots
//! handed to the UI stay valid while editing continues.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::layer::{Layer, LayerError, LayerLimits, LayerPatch};

/// Size of a working or export surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A design being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Current working size.
    pub canvas: Canvas,
    /// Target export size.
    pub final_canvas: Canvas,
    #[serde(default)]
    layers: Vec<Arc<Layer>>,
    #[serde(skip)]
    limits: LayerLimits,
}

impl Design {
    /// Create an empty design whose export size equals its working size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            final_canvas: canvas,
            layers: Vec::new(),
            limits: LayerLimits::default(),
        }
    }

    pub fn with_final_canvas(mut self, final_canvas: Canvas) -> Self {
        self.final_canvas = final_canvas;
        self
    }

    /// Parse a design from JSON.
    ///
    /// Layers are checked against the default [`LayerLimits`] and their
    /// rotation is normalized into `[0, 360)`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Json` for malformed JSON
    /// - `ConfigError::Layer` for duplicate ids or out-of-range layer values
    pub fn from_json(json: &str) -> Result<Self, crate::config::ConfigError> {
        let mut design: Design = serde_json::from_str(json)?;
        design.check_unique_ids()?;
        design.set_limits(LayerLimits::default())?;
        Ok(design)
    }

    pub(crate) fn check_unique_ids(&self) -> Result<(), LayerError> {
        for (index, layer) in self.layers.iter().enumerate() {
            if self.layers[..index].iter().any(|l| l.id() == layer.id()) {
                return Err(LayerError::DuplicateLayerId(layer.base.id.clone()));
            }
        }
        Ok(())
    }

    pub fn limits(&self) -> &LayerLimits {
        &self.limits
    }

    /// Replace the value limits, re-checking every layer against them.
    ///
    /// Layers that are already conforming keep their allocation. If any layer
    /// falls outside the new limits the design is left unchanged.
    pub fn set_limits(&mut self, limits: LayerLimits) -> Result<(), LayerError> {
        let mut conformed = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let next = limits.conform(layer)?;
            if next == **layer {
                conformed.push(Arc::clone(layer));
            } else {
                conformed.push(Arc::new(next));
            }
        }
        self.layers = conformed;
        self.limits = limits;
        Ok(())
    }

    /// Layers in insertion order.
    pub fn layers(&self) -> &[Arc<Layer>] {
        &self.layers
    }

    pub fn layer(&self, id: &str) -> Option<&Arc<Layer>> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.layer(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers sorted back-to-front by `zIndex`.
    ///
    /// The sort is stable, so layers sharing a `zIndex` keep insertion order.
    pub fn paint_order(&self) -> Vec<Arc<Layer>> {
        let mut ordered = self.layers.clone();
        ordered.sort_by_key(|layer| layer.base.z_index);
        ordered
    }

    /// A `zIndex` that paints above every current layer.
    pub fn next_z_index(&self) -> i32 {
        self.layers
            .iter()
            .map(|layer| layer.base.z_index)
            .max()
            .map_or(0, |top| top.saturating_add(1))
    }

    /// Append a layer created by the caller.
    ///
    /// # Errors
    ///
    /// - `DuplicateLayerId` if a layer with the same id already exists
    /// - `InvalidValue` if a value is non-finite or outside the design's limits
    pub fn add_layer(&mut self, layer: Layer) -> Result<Arc<Layer>, LayerError> {
        if self.contains(layer.id()) {
            return Err(LayerError::DuplicateLayerId(layer.base.id));
        }
        let layer = Arc::new(self.limits.conform(&layer)?);
        self.layers.push(Arc::clone(&layer));
        Ok(layer)
    }

    /// Remove a layer, returning its final record.
    pub fn remove_layer(&mut self, id: &str) -> Result<Arc<Layer>, LayerError> {
        let index = self
            .position(id)
            .ok_or_else(|| LayerError::LayerNotFound(id.to_string()))?;
        Ok(self.layers.remove(index))
    }

    /// Validate and merge a partial update into one layer.
    ///
    /// On success the targeted record is replaced and returned; the sequence
    /// order and every other record are unchanged. On failure the design is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// - `LayerNotFound` if no layer has the given id
    /// - `InvalidAttribute` if the patch sets an attribute foreign to the variant
    /// - `LayerLocked` if the layer is locked
    /// - `InvalidValue` if a value is non-finite or out of range
    pub fn update_layer(&mut self, id: &str, patch: &LayerPatch) -> Result<Arc<Layer>, LayerError> {
        let index = self
            .position(id)
            .ok_or_else(|| LayerError::LayerNotFound(id.to_string()))?;

        let updated = match patch.apply_to(&self.layers[index], &self.limits) {
            Ok(layer) => Arc::new(layer),
            Err(err) => {
                tracing::warn!(layer = id, error = %err, "layer update rejected");
                return Err(err);
            }
        };

        tracing::debug!(layer = id, attributes = ?patch.attributes(), "layer updated");
        self.layers[index] = Arc::clone(&updated);
        Ok(updated)
    }

    /// Ratio of export size to working size, per axis.
    ///
    /// Returns 1.0 for an axis whose working size is zero.
    pub fn export_scale(&self) -> (f64, f64) {
        let ratio = |final_size: f64, working: f64| {
            if working > 0.0 {
                final_size / working
            } else {
                1.0
            }
        };
        (
            ratio(self.final_canvas.width, self.canvas.width),
            ratio(self.final_canvas.height, self.canvas.height),
        )
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id() == id)
    }
}
