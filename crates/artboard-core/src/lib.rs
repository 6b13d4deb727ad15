//! Artboard Core - Layered image editing library
//!
//! This crate provides the editing core for Artboard: the layer model,
//! filter and geometric handlers, the selection-aware editor session, and
//! the crop/export pipeline that turns a source image into PNG bytes.

pub mod config;
pub mod decode;
pub mod design;
pub mod encode;
pub mod export;
pub mod filter;
pub mod layer;
pub mod selection;
pub mod session;
pub mod transform;

pub use config::{ConfigError, EditorConfig};
pub use design::{Canvas, Design};
pub use export::{crop_and_export, CropSession, ExportError};
pub use filter::{FilterBounds, FilterKind, FilterRange, FilterValues};
pub use layer::{Layer, LayerError, LayerKind, LayerLimits, LayerPatch, LayerType};
pub use session::{Commit, EditorSession, PreviewState};
pub use transform::{normalize_rotation, DisplayCrop, DisplayScale, PixelCrop};
