//! Artboard WASM - WebAssembly bindings for Artboard
//!
//! This crate provides WASM bindings to expose the artboard-core editing
//! session and crop/export pipeline to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - Editor session: layers, selection and slider handlers
//! - `image` - Decoded source images for cropping
//! - `export` - Crop and PNG export, resolved through a `Promise`
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditorSession, JsSourceImage, crop_and_export } from '@artboard/wasm';
//!
//! await init();
//!
//! const session = new JsEditorSession(JSON.stringify(design), undefined);
//! session.select('photo');
//! session.handle_brightness(150);
//!
//! const image = new JsSourceImage(bytes, false, false);
//! const png = await crop_and_export(image, 0, 0, image.natural_width, image.natural_height);
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod image;
mod session;

// Re-export public types
pub use export::{crop_and_export, JsCropSession};
pub use image::JsSourceImage;
pub use session::JsEditorSession;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert any displayable error into the string form JS callers receive.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
