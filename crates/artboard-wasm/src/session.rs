//! Editor session WASM bindings.
//!
//! Wraps [`EditorSession`] for the editor UI. Layers and patches cross the
//! boundary as plain JS objects (through `serde-wasm-bindgen`) or as JSON
//! strings, using the same camelCase shape the core serializes.
//!
//! Slider handlers return `true` when the selected layer was updated and
//! `false` when only the preview changed.

use std::sync::Arc;

use artboard_core::layer::{BaseLayer, LayerPatch, ShapeType};
use artboard_core::{Commit, ConfigError, Design, EditorConfig, EditorSession, Layer, LayerError};
use wasm_bindgen::prelude::*;

use crate::js_error;

/// An editing session over one design.
#[wasm_bindgen]
pub struct JsEditorSession {
    inner: EditorSession,
}

#[wasm_bindgen]
impl JsEditorSession {
    /// Create a session from a design document and optional configuration.
    ///
    /// # Arguments
    ///
    /// * `design_json` - Design as JSON (`canvas`, `finalCanvas`, `layers`)
    /// * `config_json` - Optional editor configuration as JSON; omitted
    ///   sections use the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(design_json: &str, config_json: Option<String>) -> Result<JsEditorSession, JsValue> {
        Self::from_json(design_json, config_json.as_deref()).map_err(js_error)
    }

    /// All layers in insertion order, as JS objects.
    pub fn layers(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.layers()).map_err(js_error)
    }

    /// All layers in insertion order, as a JSON array.
    pub fn layers_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.layers()).map_err(js_error)
    }

    /// Apply a patch object to a layer and return the updated layer.
    pub fn update_layer(&mut self, id: &str, patch: JsValue) -> Result<JsValue, JsValue> {
        let patch: LayerPatch = serde_wasm_bindgen::from_value(patch).map_err(js_error)?;
        let updated = self.inner.update_layer(id, &patch).map_err(js_error)?;
        serde_wasm_bindgen::to_value(&*updated).map_err(js_error)
    }

    /// Apply a JSON patch to a layer and return the updated layer as JSON.
    pub fn update_layer_json(&mut self, id: &str, patch_json: &str) -> Result<String, JsValue> {
        self.apply_json(id, patch_json).map_err(js_error)
    }

    /// Apply a patch object to the selected layer.
    ///
    /// Resolves to `null` when nothing is selected.
    pub fn update_selected_layer(&mut self, patch: JsValue) -> Result<JsValue, JsValue> {
        let patch: LayerPatch = serde_wasm_bindgen::from_value(patch).map_err(js_error)?;
        match self.inner.update_selected_layer(&patch).map_err(js_error)? {
            Some(updated) => serde_wasm_bindgen::to_value(&*updated).map_err(js_error),
            None => Ok(JsValue::NULL),
        }
    }

    /// Add a text layer on top of the stack, styled with the configured
    /// text defaults. Returns the new layer as JSON.
    pub fn add_text_layer(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: &str,
    ) -> Result<String, JsValue> {
        let base = self.place(id, x, y, width, height);
        layer_json(self.inner.add_text_layer(base, text)).map_err(js_error)
    }

    /// Add a shape layer on top of the stack. `shape_type` is the serialized
    /// name, such as `"circle"` or `"star"`.
    pub fn add_shape_layer(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        shape_type: &str,
    ) -> Result<String, JsValue> {
        self.add_shape(id, x, y, width, height, shape_type)
            .map_err(js_error)
    }

    pub fn add_image_layer(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        src: &str,
    ) -> Result<String, JsValue> {
        let base = self.place(id, x, y, width, height);
        layer_json(self.inner.add_image_layer(base, src)).map_err(js_error)
    }

    pub fn remove_layer(&mut self, id: &str) -> Result<(), JsValue> {
        self.inner.remove_layer(id).map(|_| ()).map_err(js_error)
    }

    /// Select a layer, or clear the selection with `undefined`.
    ///
    /// Returns `false` if the id names no layer; the selection is cleared.
    pub fn select(&mut self, id: Option<String>) -> bool {
        self.inner.select(id.as_deref()).is_some()
    }

    /// The selected layer id.
    #[wasm_bindgen(getter)]
    pub fn current(&self) -> Option<String> {
        self.inner.current().map(str::to_owned)
    }

    pub fn handle_brightness(&mut self, value: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_brightness(value))
    }

    pub fn handle_contrast(&mut self, value: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_contrast(value))
    }

    pub fn handle_saturation(&mut self, value: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_saturation(value))
    }

    pub fn handle_hue(&mut self, value: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_hue(value))
    }

    pub fn handle_sepia(&mut self, value: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_sepia(value))
    }

    pub fn handle_rotation(&mut self, degrees: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_rotation(degrees))
    }

    pub fn handle_flip_h(&mut self) -> Result<bool, JsValue> {
        committed(self.inner.handle_flip_h())
    }

    pub fn handle_flip_v(&mut self) -> Result<bool, JsValue> {
        committed(self.inner.handle_flip_v())
    }

    pub fn handle_zoom(&mut self, zoom: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_zoom(zoom))
    }

    pub fn handle_opacity(&mut self, opacity: f64) -> Result<bool, JsValue> {
        committed(self.inner.handle_opacity(opacity))
    }

    /// Current slider values, as a JS object.
    pub fn preview(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.preview()).map_err(js_error)
    }

    /// CSS `filter` declaration for the live preview.
    pub fn css_filter(&self) -> String {
        self.inner.preview().filters.css_filter()
    }
}

impl JsEditorSession {
    fn from_json(design_json: &str, config_json: Option<&str>) -> Result<Self, ConfigError> {
        let design = Design::from_json(design_json)?;
        let config = match config_json {
            Some(json) => EditorConfig::from_json(json)?,
            None => EditorConfig::default(),
        };
        Ok(Self {
            inner: EditorSession::new(design, config)?,
        })
    }

    fn place(&self, id: &str, x: f64, y: f64, width: f64, height: f64) -> BaseLayer {
        BaseLayer::new(id, x, y, width, height).with_z_index(self.inner.design().next_z_index())
    }

    fn add_shape(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        shape_type: &str,
    ) -> Result<String, ConfigError> {
        let shape_type: ShapeType =
            serde_json::from_value(serde_json::Value::String(shape_type.to_owned()))?;
        let base = self.place(id, x, y, width, height);
        layer_json(self.inner.add_shape_layer(base, shape_type))
    }

    fn apply_json(&mut self, id: &str, patch_json: &str) -> Result<String, ConfigError> {
        let patch = LayerPatch::from_json(patch_json)?;
        let updated = self.inner.update_layer(id, &patch)?;
        Ok(serde_json::to_string(&*updated)?)
    }
}

fn layer_json(added: Result<Arc<Layer>, LayerError>) -> Result<String, ConfigError> {
    Ok(serde_json::to_string(&*added?)?)
}

fn committed(result: Result<Commit, LayerError>) -> Result<bool, JsValue> {
    result.map(|commit| commit.is_committed()).map_err(js_error)
}
