//! Clamping for geometry committed by the drag/resize frame.
//!
//! The frame reports final positions and sizes; these helpers keep them
//! inside the desktop area and above the minimum frame size. A reading that
//! cannot be a real size is replaced by the last size that was accepted.

use crate::window::{FloatRect, Point, Size};

/// Clamp a committed size.
///
/// Empty sizes (a zero dimension, typically seen while the viewport is being
/// resized under an active gesture) yield `last_valid` unchanged. Otherwise
/// each dimension is raised to `min` and capped at `bounds`, with `min`
/// winning when the bounds are smaller than the minimum.
pub fn clamp_size(requested: Size, last_valid: Size, min: Size, bounds: Size) -> Size {
    if requested.is_empty() {
        tracing::trace!(?requested, ?last_valid, "ignoring empty frame size");
        return last_valid;
    }
    Size {
        width: clamp_dimension(requested.width, min.width, bounds.width),
        height: clamp_dimension(requested.height, min.height, bounds.height),
    }
}

fn clamp_dimension(value: u32, min: u32, max: u32) -> u32 {
    value.min(max.max(min)).max(min)
}

/// Clamp a committed origin so a frame of `size` stays inside `bounds`.
///
/// Frames wider or taller than the bounds are pinned to the bounds origin on
/// that axis.
pub fn clamp_position(position: Point, size: Size, bounds: FloatRect) -> Point {
    Point {
        x: clamp_axis(position.x, size.width, bounds.x, bounds.width),
        y: clamp_axis(position.y, size.height, bounds.y, bounds.height),
    }
}

fn clamp_axis(value: i32, extent: u32, start: i32, span: u32) -> i32 {
    let start = start as i64;
    let max = start + span as i64 - extent as i64;
    if max < start {
        return start as i32;
    }
    (value as i64).clamp(start, max) as i32
}

/// Apply both clamps to a committed rectangle.
pub fn clamp_frame(rect: FloatRect, last_valid: Size, min: Size, bounds: FloatRect) -> FloatRect {
    let size = clamp_size(rect.size(), last_valid, min, bounds.size());
    let position = clamp_position(rect.position(), size, bounds);
    FloatRect::new(position, size)
}
