//! Crop and export WASM bindings.
//!
//! Exports resolve through a JavaScript `Promise` with the PNG bytes as a
//! `Uint8Array`, or reject once with an error string.
//!
//! # Example
//!
//! ```typescript
//! import { crop_and_export, JsCropSession } from '@artboard/wasm';
//!
//! // Crop in source pixels
//! const png = await crop_and_export(image, 10, 10, 200, 100);
//!
//! // Crop in displayed pixels, scaled once per session
//! const session = new JsCropSession(image, img.width, img.height);
//! const png = await session.export(crop.x, crop.y, crop.width, crop.height);
//! ```

use artboard_core::decode::SourceImage;
use artboard_core::transform::{DisplayCrop, PixelCrop};
use artboard_core::{CropSession, ExportError};
use js_sys::{Promise, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::image::JsSourceImage;
use crate::js_error;

/// Crop `image` to a rectangle in source pixels and encode it as PNG.
///
/// The returned promise resolves with a `Uint8Array` or rejects with an
/// error string. A cross-origin image loaded without CORS access rejects
/// with the cross-origin export error.
#[wasm_bindgen]
pub fn crop_and_export(image: &JsSourceImage, x: u32, y: u32, width: u32, height: u32) -> Promise {
    export_promise(image.source().clone(), PixelCrop::new(x, y, width, height))
}

/// A crop session with its display scale fixed at creation.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Start a session for `image` as displayed at `displayed_width x displayed_height`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        image: &JsSourceImage,
        displayed_width: f64,
        displayed_height: f64,
    ) -> Result<JsCropSession, JsValue> {
        Self::start(image, displayed_width, displayed_height).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn scale_x(&self) -> f64 {
        self.inner.scale().x
    }

    #[wasm_bindgen(getter)]
    pub fn scale_y(&self) -> f64 {
        self.inner.scale().y
    }

    /// Map a displayed crop to source pixels as `[x, y, width, height]`.
    pub fn pixel_crop(&self, x: f64, y: f64, width: f64, height: f64) -> Vec<u32> {
        let crop = self.inner.pixel_crop(&DisplayCrop::new(x, y, width, height));
        vec![crop.x, crop.y, crop.width, crop.height]
    }

    /// Export a crop drawn on the displayed image.
    pub fn export(&self, x: f64, y: f64, width: f64, height: f64) -> Promise {
        let crop = self.inner.pixel_crop(&DisplayCrop::new(x, y, width, height));
        export_promise(self.inner.source().clone(), crop)
    }
}

impl JsCropSession {
    fn start(
        image: &JsSourceImage,
        displayed_width: f64,
        displayed_height: f64,
    ) -> Result<Self, ExportError> {
        let inner = CropSession::new(image.source().clone(), displayed_width, displayed_height)?;
        Ok(Self { inner })
    }
}

fn export_promise(source: SourceImage, crop: PixelCrop) -> Promise {
    future_to_promise(async move {
        let bytes = artboard_core::crop_and_export(&source, crop)
            .await
            .map_err(js_error)?;
        Ok(Uint8Array::from(bytes.as_slice()).into())
    })
}


/// WASM-specific tests that await the returned promises.
///
/// These run under `wasm-pack test` because `Promise` and `Uint8Array` need
/// a JavaScript host.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::image::tests::sample_png;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_export_resolves_with_png() {
        let image = JsSourceImage::decode(&sample_png(), false, false).unwrap();
        let value = JsFuture::from(crop_and_export(&image, 0, 0, 4, 2))
            .await
            .unwrap();

        let bytes = Uint8Array::new(&value).to_vec();
        assert_eq!(&bytes[0..8], &artboard_core::encode::PNG_SIGNATURE);
    }

    #[wasm_bindgen_test]
    async fn test_degenerate_crop_rejects() {
        let image = JsSourceImage::decode(&sample_png(), false, false).unwrap();
        let err = JsFuture::from(crop_and_export(&image, 1, 1, 0, 1))
            .await
            .unwrap_err();
        assert!(err.as_string().unwrap().contains("zero area"));
    }

    #[wasm_bindgen_test]
    async fn test_tainted_image_rejects() {
        let image = JsSourceImage::decode(&sample_png(), true, false).unwrap();
        let err = JsFuture::from(crop_and_export(&image, 0, 0, 4, 2))
            .await
            .unwrap_err();
        assert!(err.as_string().unwrap().contains("another origin"));
    }
}
