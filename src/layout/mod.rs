pub mod floating;
pub mod placement;

pub use floating::{clamp_position, clamp_size};
pub use placement::centered_with_jitter;

use crate::viewport::Viewport;
use crate::window::{FloatRect, Point, SurfaceConfig};

/// The strip between the menu bar and the dock reservation. Free-form
/// windows are kept inside it and maximized windows fill it exactly.
pub fn desktop_area(viewport: Viewport, config: &SurfaceConfig) -> FloatRect {
    let top = config.menu_bar_height.min(viewport.height);
    FloatRect {
        x: 0,
        y: top as i32,
        width: viewport.width,
        height: viewport
            .height
            .saturating_sub(config.menu_bar_height)
            .saturating_sub(config.dock_reserved_height),
    }
}

/// Geometry of a maximized frame: pinned to the top-left corner under the
/// menu bar, spanning the full width and the height left over by the menu
/// bar and dock.
pub fn maximized_rect(viewport: Viewport, config: &SurfaceConfig) -> FloatRect {
    desktop_area(viewport, config)
}

pub fn rect_contains(rect: FloatRect, point: Point) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let (px, py) = (point.x as i64, point.y as i64);
    px >= rect.x as i64 && px < rect.right() && py >= rect.y as i64 && py < rect.bottom()
}

pub fn rects_intersect(a: FloatRect, b: FloatRect) -> bool {
    if a.width == 0 || a.height == 0 || b.width == 0 || b.height == 0 {
        return false;
    }
    (a.x as i64) < b.right()
        && a.right() > b.x as i64
        && (a.y as i64) < b.bottom()
        && a.bottom() > b.y as i64
}
