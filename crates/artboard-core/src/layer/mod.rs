//! Layer model for the Artboard editor.
//!
//! A design is a stack of heterogeneous layers. Every layer shares the same
//! base geometry ([`BaseLayer`]) and carries a variant-specific payload
//! ([`LayerKind`]):
//!
//! - **Image**: a raster reference plus zoom, flips and the five filter
//!   parameters (brightness, contrast, saturation, hue, sepia)
//! - **Text**: text content and typography
//! - **Shape**: a primitive shape with fill and optional stroke
//!
//! Layers are only ever mutated through a [`LayerPatch`], which is validated
//! against the layer's variant before it is merged.
//!
//! # Serialization
//!
//! Layers serialize flat, with a `type` discriminant and camelCase fields,
//! matching the shape the web client exchanges with its REST backend:
//!
//! ```text
//! { "id": "a", "type": "image", "x": 0, "y": 0, "zIndex": 0, ..., "brightness": 100 }
//! ```

mod defaults;
mod limits;
mod patch;
mod types;

pub use defaults::{LayerDefaults, ShapeDefaults, TextDefaults};
pub use limits::LayerLimits;
pub use patch::{AttributeClass, LayerPatch};
pub use types::{
    BaseLayer, ImageLayer, Layer, LayerError, LayerId, LayerKind, LayerType, ShapeLayer,
    ShapeType, TextLayer,
};
