//! Core types for source image decoding.

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image decoded to zero width or height.
    #[error("Image has no pixels")]
    EmptyImage,
}

/// Where a source image was fetched from.
///
/// Mirrors the browser's canvas tainting rules: pixels from another origin
/// may be drawn, but not read back or encoded, unless the image was fetched
/// with anonymous CORS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ImageOrigin {
    /// Uploaded by the user or served from the editor's own origin.
    #[default]
    SameOrigin,
    /// Served from another origin.
    CrossOrigin {
        /// Fetched with `crossOrigin="anonymous"` and a permissive CORS response.
        anonymous: bool,
    },
}

impl ImageOrigin {
    /// True if encoding pixels from this origin must be refused.
    pub fn is_tainted(self) -> bool {
        matches!(self, ImageOrigin::CrossOrigin { anonymous: false })
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded source image ready for cropping.
///
/// Pixels are RGBA8 in display orientation, so `natural_width` and
/// `natural_height` match the browser's `naturalWidth`/`naturalHeight`.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
    origin: ImageOrigin,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage, origin: ImageOrigin) -> Self {
        Self { pixels, origin }
    }

    pub fn natural_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn origin(&self) -> ImageOrigin {
        self.origin
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}
