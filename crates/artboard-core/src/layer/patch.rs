//! Partial layer updates.
//!
//! A [`LayerPatch`] names a subset of layer attributes to overwrite. Before a
//! patch is merged it is checked against the target layer's variant: an
//! attribute that the variant does not carry (for example `fontSize` on a
//! shape) is rejected instead of being silently dropped.
//!
//! # Lock Semantics
//!
//! Every attribute belongs to an [`AttributeClass`]. A locked layer rejects
//! any patch that touches a class other than [`AttributeClass::Lock`], so the
//! only update a locked layer accepts is one that changes `isLocked` alone.

use serde::{Deserialize, Serialize};

use super::limits::{finite, non_negative, unit_interval, within, LayerLimits};
use super::types::{Layer, LayerError, LayerKind, LayerType, ShapeType};
use crate::filter::FilterKind;
use crate::transform::normalize_rotation;

/// Category of a layer attribute, used for lock enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeClass {
    /// Position, size, rotation, paint order, zoom and flips.
    Geometry,
    /// Brightness, contrast, saturation, hue and sepia.
    Filter,
    /// Opacity, colours and typography.
    Appearance,
    /// Raster source, text content and shape type.
    Content,
    /// The lock flag itself.
    Lock,
}

const ALL_TYPES: &[LayerType] = &[LayerType::Image, LayerType::Text, LayerType::Shape];
const IMAGE: &[LayerType] = &[LayerType::Image];
const TEXT: &[LayerType] = &[LayerType::Text];
const SHAPE: &[LayerType] = &[LayerType::Shape];
const IMAGE_TEXT: &[LayerType] = &[LayerType::Image, LayerType::Text];
const TEXT_SHAPE: &[LayerType] = &[LayerType::Text, LayerType::Shape];

/// Class and owning variants of a serialized attribute name.
fn attribute_info(attribute: &str) -> (AttributeClass, &'static [LayerType]) {
    use AttributeClass::*;
    match attribute {
        "x" | "y" | "zIndex" | "rotation" | "width" | "height" => (Geometry, ALL_TYPES),
        "zoom" => (Geometry, IMAGE),
        "flipH" | "flipV" => (Geometry, IMAGE_TEXT),
        "brightness" | "contrast" | "saturation" | "hue" | "sepia" => (Filter, IMAGE),
        "opacity" => (Appearance, ALL_TYPES),
        "backgroundColor" => (Appearance, IMAGE),
        "color" => (Appearance, TEXT_SHAPE),
        "fontSize" | "fontFamily" | "fontWeight" => (Appearance, TEXT),
        "strokeColor" | "strokeWidth" => (Appearance, SHAPE),
        "src" => (Content, IMAGE),
        "text" => (Content, TEXT),
        "shapeType" => (Content, SHAPE),
        // isLocked
        _ => (Lock, ALL_TYPES),
    }
}

/// A partial set of layer attributes.
///
/// Deserializes from the same camelCase names the layer serializes to and
/// rejects unknown names outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_h: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_v: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepia: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<ShapeType>,
}

impl LayerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch setting a single filter dimension.
    pub fn filter(kind: FilterKind, value: f64) -> Self {
        let mut patch = Self::default();
        match kind {
            FilterKind::Brightness => patch.brightness = Some(value),
            FilterKind::Contrast => patch.contrast = Some(value),
            FilterKind::Saturation => patch.saturation = Some(value),
            FilterKind::Hue => patch.hue = Some(value),
            FilterKind::Sepia => patch.sepia = Some(value),
        }
        patch
    }

    /// Parse a patch from a JSON object such as `{"opacity": 0.5}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialized names of the attributes this patch sets.
    pub fn attributes(&self) -> Vec<&'static str> {
        let present = [
            ("x", self.x.is_some()),
            ("y", self.y.is_some()),
            ("zIndex", self.z_index.is_some()),
            ("rotation", self.rotation.is_some()),
            ("width", self.width.is_some()),
            ("height", self.height.is_some()),
            ("isLocked", self.is_locked.is_some()),
            ("zoom", self.zoom.is_some()),
            ("flipH", self.flip_h.is_some()),
            ("flipV", self.flip_v.is_some()),
            ("brightness", self.brightness.is_some()),
            ("contrast", self.contrast.is_some()),
            ("saturation", self.saturation.is_some()),
            ("hue", self.hue.is_some()),
            ("sepia", self.sepia.is_some()),
            ("opacity", self.opacity.is_some()),
            ("backgroundColor", self.background_color.is_some()),
            ("color", self.color.is_some()),
            ("fontSize", self.font_size.is_some()),
            ("fontFamily", self.font_family.is_some()),
            ("fontWeight", self.font_weight.is_some()),
            ("strokeColor", self.stroke_color.is_some()),
            ("strokeWidth", self.stroke_width.is_some()),
            ("src", self.src.is_some()),
            ("text", self.text.is_some()),
            ("shapeType", self.shape_type.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }

    /// Whether any attribute of the given class is set.
    pub fn touches(&self, class: AttributeClass) -> bool {
        self.attributes()
            .into_iter()
            .any(|name| attribute_info(name).0 == class)
    }

    /// Build the updated record for `layer`, leaving `layer` untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidAttribute` if the patch sets an attribute foreign to the variant
    /// - `LayerLocked` if the layer is locked and the patch touches anything
    ///   other than `isLocked`
    /// - `InvalidValue` if a numeric value is non-finite, or a filter or zoom
    ///   value falls outside `limits`
    pub(crate) fn apply_to(
        &self,
        layer: &Layer,
        limits: &LayerLimits,
    ) -> Result<Layer, LayerError> {
        let layer_type = layer.layer_type();
        let attributes = self.attributes();

        for &attribute in &attributes {
            let (_, owners) = attribute_info(attribute);
            if !owners.contains(&layer_type) {
                return Err(LayerError::InvalidAttribute {
                    attribute,
                    layer_type,
                });
            }
        }

        if layer.is_locked()
            && attributes
                .iter()
                .any(|name| attribute_info(name).0 != AttributeClass::Lock)
        {
            return Err(LayerError::LayerLocked(layer.base.id.clone()));
        }

        let mut next = layer.clone();
        let base = &mut next.base;

        if let Some(x) = self.x {
            base.x = finite("x", x)?;
        }
        if let Some(y) = self.y {
            base.y = finite("y", y)?;
        }
        if let Some(z_index) = self.z_index {
            base.z_index = z_index;
        }
        if let Some(rotation) = self.rotation {
            base.rotation = normalize_rotation(finite("rotation", rotation)?);
        }
        if let Some(width) = self.width {
            base.width = non_negative("width", width)?;
        }
        if let Some(height) = self.height {
            base.height = non_negative("height", height)?;
        }
        if let Some(is_locked) = self.is_locked {
            base.is_locked = is_locked;
        }

        match &mut next.kind {
            LayerKind::Image(image) => {
                if let Some(zoom) = self.zoom {
                    image.zoom = within("zoom", zoom, limits.zoom)?;
                }
                if let Some(flip_h) = self.flip_h {
                    image.flip_h = flip_h;
                }
                if let Some(flip_v) = self.flip_v {
                    image.flip_v = flip_v;
                }
                for kind in FilterKind::ALL {
                    if let Some(value) = self.filter_value(kind) {
                        let value = within(kind.attribute(), value, limits.filters.range(kind))?;
                        image.filters.set(kind, value);
                    }
                }
                if let Some(opacity) = self.opacity {
                    image.opacity = unit_interval("opacity", opacity)?;
                }
                if let Some(color) = &self.background_color {
                    image.background_color = color.clone();
                }
                if let Some(src) = &self.src {
                    image.src = src.clone();
                }
            }
            LayerKind::Text(text) => {
                if let Some(flip_h) = self.flip_h {
                    text.flip_h = flip_h;
                }
                if let Some(flip_v) = self.flip_v {
                    text.flip_v = flip_v;
                }
                if let Some(opacity) = self.opacity {
                    text.opacity = unit_interval("opacity", opacity)?;
                }
                if let Some(color) = &self.color {
                    text.color = color.clone();
                }
                if let Some(font_size) = self.font_size {
                    text.font_size = non_negative("fontSize", font_size)?;
                }
                if let Some(family) = &self.font_family {
                    text.font_family = family.clone();
                }
                if let Some(weight) = self.font_weight {
                    text.font_weight = weight;
                }
                if let Some(content) = &self.text {
                    text.text = content.clone();
                }
            }
            LayerKind::Shape(shape) => {
                if let Some(opacity) = self.opacity {
                    shape.opacity = unit_interval("opacity", opacity)?;
                }
                if let Some(color) = &self.color {
                    shape.color = color.clone();
                }
                if let Some(stroke) = &self.stroke_color {
                    shape.stroke_color = Some(stroke.clone());
                }
                if let Some(stroke_width) = self.stroke_width {
                    shape.stroke_width = Some(non_negative("strokeWidth", stroke_width)?);
                }
                if let Some(shape_type) = self.shape_type {
                    shape.shape_type = shape_type;
                }
            }
        }

        Ok(next)
    }

    fn filter_value(&self, kind: FilterKind) -> Option<f64> {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Saturation => self.saturation,
            FilterKind::Hue => self.hue,
            FilterKind::Sepia => self.sepia,
        }
    }
}
