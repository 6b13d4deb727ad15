//! Core types for the layer model.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::FilterValues;

/// Identifier of a layer, stable for the layer's lifetime.
pub type LayerId = String;

/// Error types for layer model operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayerError {
    /// No layer with the given id exists in the design.
    #[error("Layer not found: {0}")]
    LayerNotFound(LayerId),

    /// The layer is locked and the update touches locked attributes.
    #[error("Layer is locked: {0}")]
    LayerLocked(LayerId),

    /// The attribute does not belong to the layer's variant.
    #[error("Attribute `{attribute}` is not valid for {layer_type} layers")]
    InvalidAttribute {
        attribute: &'static str,
        layer_type: LayerType,
    },

    /// The attribute belongs to the variant but its value is out of range.
    #[error("Invalid value for `{attribute}`: {reason}")]
    InvalidValue {
        attribute: &'static str,
        reason: String,
    },

    /// A layer with the same id is already part of the design.
    #[error("Duplicate layer id: {0}")]
    DuplicateLayerId(LayerId),
}

/// Discriminant of the layer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Image,
    Text,
    Shape,
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerType::Image => f.write_str("image"),
            LayerType::Text => f.write_str("text"),
            LayerType::Shape => f.write_str("shape"),
        }
    }
}

/// Attributes shared by every layer variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLayer {
    pub id: LayerId,
    /// Left edge of the unrotated layer box, in canvas pixels.
    pub x: f64,
    /// Top edge of the unrotated layer box, in canvas pixels.
    pub y: f64,
    /// Paint order. Higher values paint later (on top).
    #[serde(default)]
    pub z_index: i32,
    /// Rotation about the layer centre in degrees, always in `[0, 360)`.
    #[serde(default)]
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub is_locked: bool,
}

impl BaseLayer {
    /// Create an unlocked, unrotated base at the given position and size.
    pub fn new(id: impl Into<LayerId>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            z_index: 0,
            rotation: 0.0,
            width,
            height,
            is_locked: false,
        }
    }

    /// Set the paint order.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// A raster layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLayer {
    /// Raster reference (URL or object URL).
    pub src: String,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
    #[serde(default = "default_background")]
    pub background_color: String,
    /// Brightness, contrast, saturation, hue and sepia.
    #[serde(flatten)]
    pub filters: FilterValues,
}

impl ImageLayer {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            zoom: default_zoom(),
            opacity: default_opacity(),
            flip_h: false,
            flip_v: false,
            background_color: default_background(),
            filters: FilterValues::default(),
        }
    }
}

/// A text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    pub text: String,
    pub font_size: f64,
    pub color: String,
    pub font_family: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
}

/// Primitive shapes supported by shape layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Rectangle,
    Circle,
    Triangle,
    Line,
    Star,
}

/// A vector shape layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeLayer {
    pub shape_type: ShapeType,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

/// Variant-specific payload of a layer, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    Image(ImageLayer),
    Text(TextLayer),
    Shape(ShapeLayer),
}

/// One addressable visual element of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(flatten)]
    pub base: BaseLayer,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    pub fn new(base: BaseLayer, kind: LayerKind) -> Self {
        Self { base, kind }
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn layer_type(&self) -> LayerType {
        match self.kind {
            LayerKind::Image(_) => LayerType::Image,
            LayerKind::Text(_) => LayerType::Text,
            LayerKind::Shape(_) => LayerType::Shape,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.base.is_locked
    }

    /// Filter parameters, present only on image layers.
    pub fn filters(&self) -> Option<&FilterValues> {
        match &self.kind {
            LayerKind::Image(image) => Some(&image.filters),
            _ => None,
        }
    }

    pub fn opacity(&self) -> f64 {
        match &self.kind {
            LayerKind::Image(image) => image.opacity,
            LayerKind::Text(text) => text.opacity,
            LayerKind::Shape(shape) => shape.opacity,
        }
    }

    /// Horizontal and vertical mirroring. Shapes are never flipped.
    pub fn flips(&self) -> (bool, bool) {
        match &self.kind {
            LayerKind::Image(image) => (image.flip_h, image.flip_v),
            LayerKind::Text(text) => (text.flip_h, text.flip_v),
            LayerKind::Shape(_) => (false, false),
        }
    }
}

fn default_zoom() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_background() -> String {
    "transparent".to_string()
}

fn default_font_weight() -> u16 {
    400
}
