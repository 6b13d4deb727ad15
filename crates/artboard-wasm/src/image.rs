//! WASM wrapper for decoded source images.

use artboard_core::decode::{decode_source, DecodeError, ImageOrigin, SourceImage};
use wasm_bindgen::prelude::*;

use crate::js_error;

/// A decoded source image, kept in WASM memory until it is exported.
///
/// # Memory Management
///
/// Pixels never cross into JavaScript; only the exported PNG does. The
/// generated `free()` releases a large image early, otherwise wasm-bindgen's
/// finalizer handles cleanup.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Decode PNG or JPEG bytes.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Image file bytes as a `Uint8Array`
    /// * `cross_origin` - The image was fetched from another origin
    /// * `anonymous` - The fetch used `crossOrigin="anonymous"` and CORS allowed it
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8], cross_origin: bool, anonymous: bool) -> Result<JsSourceImage, JsValue> {
        Self::decode(bytes, cross_origin, anonymous).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn natural_width(&self) -> u32 {
        self.inner.natural_width()
    }

    #[wasm_bindgen(getter)]
    pub fn natural_height(&self) -> u32 {
        self.inner.natural_height()
    }

    /// Whether exporting this image will be refused.
    #[wasm_bindgen(getter)]
    pub fn is_tainted(&self) -> bool {
        self.inner.origin().is_tainted()
    }
}

impl JsSourceImage {
    pub(crate) fn decode(
        bytes: &[u8],
        cross_origin: bool,
        anonymous: bool,
    ) -> Result<Self, DecodeError> {
        let origin = if cross_origin {
            ImageOrigin::CrossOrigin { anonymous }
        } else {
            ImageOrigin::SameOrigin
        };
        Ok(Self {
            inner: decode_source(bytes, origin)?,
        })
    }

    pub(crate) fn source(&self) -> &SourceImage {
        &self.inner
    }
}
