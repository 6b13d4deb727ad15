//! Image encoding for export.
//!
//! This module provides functionality for:
//! - Encoding RGBA pixel data to PNG, preserving transparency
//!
//! PNG is lossless, so a decoded export reproduces the cropped pixels exactly.
//!
//! # Examples
//!
//! ```ignore
//! use artboard_core::encode::encode_png;
//!
//! let pixels = vec![0u8; 100 * 100 * 4]; // Transparent image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError, PNG_SIGNATURE};
