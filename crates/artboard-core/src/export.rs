//! Crop/export pipeline.
//!
//! Turns a source image and a crop rectangle into PNG bytes:
//!
//! 1. Reject zero-area crops before anything is allocated
//! 2. Reject crops larger than a browser canvas could hold
//! 3. Allocate a transparent `width x height` surface
//! 4. Copy the crop region onto it at 1:1
//! 5. Encode as PNG, refusing tainted cross-origin pixels
//!
//! The export resolves or rejects exactly once. Failures are returned to
//! the caller and never retried here.

use thiserror::Error;

use crate::decode::SourceImage;
use crate::encode::{encode_png, EncodeError};
use crate::transform::{crop_region, DisplayCrop, DisplayScale, PixelCrop};

/// Largest edge, in pixels, of an export surface.
pub const MAX_EXPORT_DIMENSION: u32 = 16_384;

/// Largest area, in pixels, of an export surface.
pub const MAX_EXPORT_AREA: u64 = 268_435_456;

/// Errors that can occur while exporting a crop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// The crop rectangle has zero width or height.
    #[error("Crop rectangle has zero area ({width}x{height})")]
    DegenerateCrop { width: u32, height: u32 },

    /// The crop rectangle exceeds the export surface limits.
    #[error("Crop rectangle {width}x{height} exceeds the export surface limit")]
    CropTooLarge { width: u32, height: u32 },

    /// The displayed image size cannot be used to compute a scale.
    #[error("Invalid displayed size {width}x{height}")]
    InvalidDisplaySize { width: f64, height: f64 },

    /// Rasterization or encoding failed.
    #[error("Export failed: {0}")]
    Encode(#[from] EncodeError),
}

impl ExportError {
    /// True if the export failed because the source is cross-origin tainted.
    pub fn is_cross_origin(&self) -> bool {
        matches!(self, ExportError::Encode(EncodeError::CrossOrigin))
    }
}

/// Crop `source` to `crop` (in source pixels) and encode the result as PNG.
///
/// # Errors
///
/// - `DegenerateCrop` if the crop has zero width or height
/// - `CropTooLarge` if the crop exceeds [`MAX_EXPORT_DIMENSION`] or [`MAX_EXPORT_AREA`]
/// - `Encode(EncodeError::CrossOrigin)` if the source is tainted
/// - `Encode(_)` if PNG encoding fails
#[tracing::instrument(skip(source), fields(
    source_width = source.natural_width(),
    source_height = source.natural_height(),
))]
pub fn export_crop(source: &SourceImage, crop: PixelCrop) -> Result<Vec<u8>, ExportError> {
    check_crop(crop)?;

    if source.origin().is_tainted() {
        tracing::warn!(origin = ?source.origin(), "refusing to export tainted source");
        return Err(EncodeError::CrossOrigin.into());
    }

    let surface = crop_region(source.pixels(), crop);
    let bytes = encode_png(surface.as_raw(), surface.width(), surface.height())?;
    tracing::debug!(bytes = bytes.len(), "crop exported");
    Ok(bytes)
}

/// Asynchronous form of [`export_crop`].
///
/// Resolves once with the PNG bytes or rejects once with an [`ExportError`];
/// there are no partial results and no cancellation.
pub async fn crop_and_export(source: &SourceImage, crop: PixelCrop) -> Result<Vec<u8>, ExportError> {
    export_crop(source, crop)
}

fn check_crop(crop: PixelCrop) -> Result<(), ExportError> {
    if crop.is_degenerate() {
        return Err(ExportError::DegenerateCrop {
            width: crop.width,
            height: crop.height,
        });
    }
    if crop.width > MAX_EXPORT_DIMENSION
        || crop.height > MAX_EXPORT_DIMENSION
        || crop.area() > MAX_EXPORT_AREA
    {
        return Err(ExportError::CropTooLarge {
            width: crop.width,
            height: crop.height,
        });
    }
    Ok(())
}

/// A crop session over one source image.
///
/// The display scale is fixed when the session starts, from the size the
/// image was displayed at, and reused for every crop the user confirms.
#[derive(Debug, Clone)]
pub struct CropSession {
    source: SourceImage,
    scale: DisplayScale,
}

impl CropSession {
    /// Start a session for `source` displayed at `displayed_width x displayed_height`.
    pub fn new(
        source: SourceImage,
        displayed_width: f64,
        displayed_height: f64,
    ) -> Result<Self, ExportError> {
        let scale = DisplayScale::new(
            source.natural_width(),
            source.natural_height(),
            displayed_width,
            displayed_height,
        )
        .ok_or(ExportError::InvalidDisplaySize {
            width: displayed_width,
            height: displayed_height,
        })?;

        Ok(Self { source, scale })
    }

    pub fn scale(&self) -> DisplayScale {
        self.scale
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Map a crop drawn on the displayed image onto source pixels.
    pub fn pixel_crop(&self, crop: &DisplayCrop) -> PixelCrop {
        self.scale.to_pixel_crop(crop)
    }

    /// Export a crop drawn on the displayed image.
    pub async fn export(&self, crop: &DisplayCrop) -> Result<Vec<u8>, ExportError> {
        crop_and_export(&self.source, self.pixel_crop(crop)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_source, ImageOrigin};
    use crate::encode::PNG_SIGNATURE;
    use image::{Rgba, RgbaImage};

    fn source(width: u32, height: u32, origin: ImageOrigin) -> SourceImage {
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, ((x + y) % 256) as u8])
        });
        SourceImage::new(pixels, origin)
    }

    #[test]
    fn test_full_bounds_round_trip_is_lossless() {
        let src = source(37, 23, ImageOrigin::SameOrigin);
        let crop = PixelCrop::full(src.natural_width(), src.natural_height());

        let png = pollster::block_on(crop_and_export(&src, crop)).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);

        let decoded = decode_source(&png, ImageOrigin::SameOrigin).unwrap();
        assert_eq!(decoded.pixels().as_raw(), src.pixels().as_raw());
    }

    #[test]
    fn test_sub_region_export() {
        let src = source(20, 20, ImageOrigin::SameOrigin);
        let png = export_crop(&src, PixelCrop::new(5, 6, 4, 3)).unwrap();

        let decoded = decode_source(&png, ImageOrigin::SameOrigin).unwrap();
        assert_eq!(decoded.pixels().dimensions(), (4, 3));
        assert_eq!(decoded.pixels().get_pixel(0, 0), src.pixels().get_pixel(5, 6));
        assert_eq!(decoded.pixels().get_pixel(3, 2), src.pixels().get_pixel(8, 8));
    }

    #[test]
    fn test_degenerate_crop_rejected() {
        let src = source(100, 100, ImageOrigin::SameOrigin);
        let result = pollster::block_on(crop_and_export(&src, PixelCrop::new(10, 10, 0, 50)));
        assert_eq!(
            result,
            Err(ExportError::DegenerateCrop {
                width: 0,
                height: 50
            })
        );
    }

    #[test]
    fn test_degenerate_checked_before_taint() {
        let src = source(10, 10, ImageOrigin::CrossOrigin { anonymous: false });
        assert!(matches!(
            export_crop(&src, PixelCrop::new(0, 0, 5, 0)),
            Err(ExportError::DegenerateCrop { .. })
        ));
    }

    #[test]
    fn test_oversized_crop_rejected_before_allocation() {
        let src = source(10, 10, ImageOrigin::SameOrigin);

        let result = export_crop(&src, PixelCrop::new(0, 0, MAX_EXPORT_DIMENSION + 1, 10));
        assert!(matches!(result, Err(ExportError::CropTooLarge { .. })));

        let result = export_crop(&src, PixelCrop::new(0, 0, u32::MAX, u32::MAX));
        assert!(matches!(result, Err(ExportError::CropTooLarge { .. })));
    }

    #[test]
    fn test_tainted_source_rejected_as_cross_origin() {
        let src = source(10, 10, ImageOrigin::CrossOrigin { anonymous: false });
        let err = export_crop(&src, PixelCrop::full(10, 10)).unwrap_err();

        assert!(err.is_cross_origin());
        assert_eq!(err, ExportError::Encode(EncodeError::CrossOrigin));
    }

    #[test]
    fn test_tainted_source_rejected_before_cropping() {
        // A maximal crop would need a 1 GiB surface if it were rasterized.
        let src = source(10, 10, ImageOrigin::CrossOrigin { anonymous: false });
        let crop = PixelCrop::new(0, 0, MAX_EXPORT_DIMENSION, MAX_EXPORT_DIMENSION);
        assert_eq!(crop.area(), MAX_EXPORT_AREA);

        let err = export_crop(&src, crop).unwrap_err();
        assert!(err.is_cross_origin());
    }

    #[test]
    fn test_anonymous_cross_origin_exports() {
        let src = source(10, 10, ImageOrigin::CrossOrigin { anonymous: true });
        assert!(export_crop(&src, PixelCrop::full(10, 10)).is_ok());
    }

    #[test]
    fn test_crop_past_edge_exports_transparent_padding() {
        let src = source(10, 10, ImageOrigin::SameOrigin);
        let png = export_crop(&src, PixelCrop::new(8, 8, 4, 4)).unwrap();

        let decoded = decode_source(&png, ImageOrigin::SameOrigin).unwrap();
        assert_eq!(decoded.pixels().dimensions(), (4, 4));
        assert_eq!(decoded.pixels().get_pixel(3, 3), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_crop_session_maps_display_coordinates() {
        // 400x200 source displayed at 200x100: scale 2
        let src = source(400, 200, ImageOrigin::SameOrigin);
        let session = CropSession::new(src, 200.0, 100.0).unwrap();
        assert_eq!(session.scale(), DisplayScale { x: 2.0, y: 2.0 });

        let display_crop = DisplayCrop::new(10.0, 20.0, 50.0, 30.0);
        assert_eq!(session.pixel_crop(&display_crop), PixelCrop::new(20, 40, 100, 60));

        let png = pollster::block_on(session.export(&display_crop)).unwrap();
        let decoded = decode_source(&png, ImageOrigin::SameOrigin).unwrap();
        assert_eq!(decoded.pixels().dimensions(), (100, 60));
        assert_eq!(
            decoded.pixels().get_pixel(0, 0),
            session.source().pixels().get_pixel(20, 40)
        );
    }

    #[test]
    fn test_crop_session_rejects_zero_display_size() {
        let src = source(10, 10, ImageOrigin::SameOrigin);
        assert!(matches!(
            CropSession::new(src, 0.0, 10.0),
            Err(ExportError::InvalidDisplaySize { .. })
        ));
    }

    #[test]
    fn test_export_error_display() {
        let err = ExportError::DegenerateCrop {
            width: 0,
            height: 50,
        };
        assert_eq!(err.to_string(), "Crop rectangle has zero area (0x50)");
        assert!(!err.is_cross_origin());
    }
}
