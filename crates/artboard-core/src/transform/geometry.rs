//! Render geometry for layers.
//!
//! Maps a layer's local frame (`0..width`, `0..height`) onto the canvas using
//! the transform order documented in the parent module.

use kurbo::{Affine, Rect, Vec2};

use crate::layer::Layer;

/// Affine transform from the layer's local frame to canvas coordinates.
///
/// Composition (applied right to left):
///
/// ```text
/// translate(centre) * rotate(rotation) * scale(flip_x, flip_y) * translate(-half_size)
/// ```
pub fn layer_transform(layer: &Layer) -> Affine {
    let base = &layer.base;
    let (flip_h, flip_v) = layer.flips();

    let half = Vec2::new(base.width / 2.0, base.height / 2.0);
    let centre = Vec2::new(base.x, base.y) + half;
    let sx = if flip_h { -1.0 } else { 1.0 };
    let sy = if flip_v { -1.0 } else { 1.0 };

    Affine::translate(centre)
        * Affine::rotate(base.rotation.to_radians())
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(-half)
}

/// Axis-aligned bounding box of the transformed layer on the canvas.
pub fn layer_bounds(layer: &Layer) -> Rect {
    let local = Rect::new(0.0, 0.0, layer.base.width, layer.base.height);
    layer_transform(layer).transform_rect_bbox(local)
}
