//! Source image decoding for the crop/export pipeline.
//!
//! This module provides functionality for:
//! - Decoding uploaded PNG and JPEG images to RGBA
//! - Applying EXIF orientation so pixel coordinates match the displayed image
//! - Tracking the image origin for cross-origin export checks
//!
//! # Examples
//!
//! ```ignore
//! use artboard_core::decode::{decode_source, ImageOrigin};
//!
//! let bytes = std::fs::read("upload.png").unwrap();
//! let source = decode_source(&bytes, ImageOrigin::SameOrigin).unwrap();
//! println!("Decoded {}x{} image", source.natural_width(), source.natural_height());
//! ```

mod source;
mod types;

pub use source::{decode_source, get_orientation};
pub use types::{DecodeError, ImageOrigin, Orientation, SourceImage};
