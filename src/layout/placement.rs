use crate::constants::{CENTER_LIFT, PLACEMENT_MARGIN};
use crate::viewport::Viewport;
use crate::window::{Point, Size};

/// Center a window of `size` in `viewport`, lift it slightly above the
/// vertical midpoint, then nudge it by `jitter`.
///
/// The result never comes closer than [`PLACEMENT_MARGIN`] to the left or top
/// edge, which also covers windows larger than the viewport.
pub fn centered_with_jitter(size: Size, viewport: Viewport, jitter: (i32, i32)) -> Point {
    let (dx, dy) = jitter;
    let x = half_rounded(viewport.width as i64 - size.width as i64) + dx as i64;
    let y = half_rounded(viewport.height as i64 - size.height as i64) - CENTER_LIFT as i64
        + dy as i64;
    Point::new(
        clamp_i32(x.max(PLACEMENT_MARGIN as i64)),
        clamp_i32(y.max(PLACEMENT_MARGIN as i64)),
    )
}

// Halves rounding .5 toward positive infinity.
fn half_rounded(value: i64) -> i64 {
    value.div_euclid(2) + value.rem_euclid(2)
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
