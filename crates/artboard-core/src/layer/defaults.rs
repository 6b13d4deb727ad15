//! Externally supplied defaults for newly created layers.
//!
//! The UI owns the choice of default font, colours and stroke; the editor only
//! applies them when a layer is added.

use serde::{Deserialize, Serialize};

use super::types::{
    BaseLayer, ImageLayer, Layer, LayerKind, ShapeLayer, ShapeType, TextLayer,
};

/// Defaults applied to new text layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextDefaults {
    pub font_size: f64,
    pub color: String,
    pub font_family: String,
    pub font_weight: u16,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_size: 32.0,
            color: "#000000".to_string(),
            font_family: "Inter".to_string(),
            font_weight: 400,
        }
    }
}

/// Defaults applied to new shape layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeDefaults {
    pub color: String,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            color: "#3b82f6".to_string(),
            stroke_color: None,
            stroke_width: None,
        }
    }
}

/// Defaults for every layer variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerDefaults {
    pub text: TextDefaults,
    pub shape: ShapeDefaults,
}

impl LayerDefaults {
    pub fn text_layer(&self, base: BaseLayer, text: impl Into<String>) -> Layer {
        Layer::new(
            base,
            LayerKind::Text(TextLayer {
                text: text.into(),
                font_size: self.text.font_size,
                color: self.text.color.clone(),
                font_family: self.text.font_family.clone(),
                font_weight: self.text.font_weight,
                opacity: 1.0,
                flip_h: false,
                flip_v: false,
            }),
        )
    }

    pub fn shape_layer(&self, base: BaseLayer, shape_type: ShapeType) -> Layer {
        Layer::new(
            base,
            LayerKind::Shape(ShapeLayer {
                shape_type,
                color: self.shape.color.clone(),
                stroke_color: self.shape.stroke_color.clone(),
                stroke_width: self.shape.stroke_width,
                opacity: 1.0,
            }),
        )
    }

    /// Image layers have no configurable defaults beyond neutral filters.
    pub fn image_layer(&self, base: BaseLayer, src: impl Into<String>) -> Layer {
        Layer::new(base, LayerKind::Image(ImageLayer::new(src)))
    }
}
