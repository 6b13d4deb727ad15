//! Image cropping from displayed coordinates to source pixels.
//!
//! The crop box is drawn by the user on a *displayed* image, which is usually
//! scaled to fit the editor. Before sampling, the box is mapped back onto the
//! source raster with a [`DisplayScale`]:
//!
//! ```text
//! scale_x = natural_width  / displayed_width
//! scale_y = natural_height / displayed_height
//! ```
//!
//! The scale must be computed once per crop session, from the displayed size
//! at the time the crop box was drawn. Each crop edge is scaled and rounded
//! independently, so the right/bottom edges never drift by accumulated
//! rounding of width and height.
//!
//! # Example
//!
//! ```ignore
//! // A 4000x3000 photo shown at 800x600
//! let scale = DisplayScale::new(4000, 3000, 800.0, 600.0).unwrap();
//! let crop = scale.to_pixel_crop(&DisplayCrop::new(100.0, 50.0, 200.0, 200.0));
//! assert_eq!(crop, PixelCrop::new(500, 250, 1000, 1000));
//! ```

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Crop rectangle in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelCrop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelCrop {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Crop covering an entire `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// True if the crop has zero width or height.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered by the crop.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Crop rectangle in displayed (on-screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayCrop {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayCrop {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Ratio of native to displayed resolution, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayScale {
    pub x: f64,
    pub y: f64,
}

impl DisplayScale {
    /// Compute the scale for an image of natural size `natural_width x
    /// natural_height` displayed at `displayed_width x displayed_height`.
    ///
    /// Returns `None` if the displayed size is zero, negative or non-finite.
    pub fn new(
        natural_width: u32,
        natural_height: u32,
        displayed_width: f64,
        displayed_height: f64,
    ) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(displayed_width) || !valid(displayed_height) {
            return None;
        }
        Some(Self {
            x: natural_width as f64 / displayed_width,
            y: natural_height as f64 / displayed_height,
        })
    }

    /// Scale for an image displayed at its native resolution.
    pub fn identity() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// Map a displayed crop onto source pixels.
    ///
    /// Edges are rounded to the nearest pixel; negative edges clamp to 0.
    pub fn to_pixel_crop(&self, crop: &DisplayCrop) -> PixelCrop {
        // `as u32` saturates: negatives and NaN become 0
        let left = (crop.x * self.x).round() as u32;
        let top = (crop.y * self.y).round() as u32;
        let right = ((crop.x + crop.width) * self.x).round() as u32;
        let bottom = ((crop.y + crop.height) * self.y).round() as u32;

        PixelCrop {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}

/// Copy the crop region of `image` into a new transparent surface.
///
/// The output is exactly `crop.width x crop.height`. Pixels are copied 1:1
/// with no resampling; any part of the crop that lies outside the source
/// stays fully transparent. The crop is not validated here: callers reject
/// degenerate or oversized crops before allocating.
pub fn crop_region(image: &RgbaImage, crop: PixelCrop) -> RgbaImage {
    let (src_w, src_h) = image.dimensions();

    // Zero-initialized RGBA is transparent black
    let mut output = RgbaImage::new(crop.width, crop.height);

    let copy_w = src_w.saturating_sub(crop.x).min(crop.width) as usize;
    let copy_h = src_h.saturating_sub(crop.y).min(crop.height) as usize;
    if copy_w == 0 || copy_h == 0 {
        return output;
    }

    let src: &[u8] = image.as_raw();
    let dst: &mut [u8] = &mut output;
    let row_bytes = copy_w * 4;

    // Copy pixel data row by row for efficiency
    for row in 0..copy_h {
        let src_start = ((crop.y as usize + row) * src_w as usize + crop.x as usize) * 4;
        let dst_start = row * crop.width as usize * 4;
        dst[dst_start..dst_start + row_bytes]
            .copy_from_slice(&src[src_start..src_start + row_bytes]);
    }

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================
