//! Shared crate-wide constants.
//!
//! Geometry values are in desktop pixels. The terminal host converts them to
//! cells with [`crate::config::CellMetrics`].

/// Height of the fixed menu bar along the top of the desktop.
pub const MENU_BAR_HEIGHT: u32 = 28;

/// Vertical space kept free for the dock along the bottom of the desktop.
///
/// Maximized windows stop this far above the bottom edge of the viewport.
pub const DOCK_RESERVED_HEIGHT: u32 = 80;

/// Smallest width a free-form window may be resized to.
pub const MIN_WINDOW_WIDTH: u32 = 380;

/// Smallest height a free-form window may be resized to.
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Viewport width assumed when no viewport can be read.
pub const FALLBACK_VIEWPORT_WIDTH: u32 = 1440;

/// Viewport height assumed when no viewport can be read.
pub const FALLBACK_VIEWPORT_HEIGHT: u32 = 900;

/// Minimum distance a centered window keeps from the top-left viewport edge.
pub const PLACEMENT_MARGIN: i32 = 60;

/// Centered windows sit this far above the true vertical center.
pub const CENTER_LIFT: i32 = 20;

/// z-index every entry carries before its first focus.
pub const BASE_Z_INDEX: u32 = 10;

/// Initial value of the shared z counter. The first focus assigns one more.
pub const INITIAL_TOP_Z: u32 = 11;

/// Label the menu bar shows when no window is active.
pub const HOME_APP_NAME: &str = "Finder";
