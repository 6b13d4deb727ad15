//! Geometric transforms: rotation, render geometry and cropping.
//!
//! # Coordinate System
//!
//! - Canvas and layer coordinates are in pixels, origin at the top-left
//!   corner, y pointing down
//! - Rotation angles are in degrees, positive = clockwise on screen, stored
//!   normalized to `[0, 360)`
//! - A layer's `(x, y)` is the top-left corner of its unrotated box; rotation
//!   and flips pivot around the box centre
//!
//! # Render Transform Order
//!
//! A point in the layer's local frame reaches the canvas through:
//! 1. Translate so the box centre is the origin
//! 2. Flip (mirror) horizontally and/or vertically
//! 3. Rotate
//! 4. Translate the centre to its canvas position
//!
//! Flips therefore mirror the content in its own frame, and rotation is
//! applied to the already-mirrored content.

mod crop;
mod geometry;
mod rotation;

pub use crop::{crop_region, DisplayCrop, DisplayScale, PixelCrop};
pub use geometry::{layer_bounds, layer_transform};
pub use rotation::normalize_rotation;
