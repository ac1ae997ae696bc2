//! Viewport provider seam.
//!
//! The registry centers windows against the viewport once at construction;
//! the surface reads it again on every layout pass to size maximized frames.
//! Providers that cannot report a size (headless hosts, a terminal that
//! refuses `size()`) return `None` and callers fall back to
//! [`Viewport::FALLBACK`].

use crate::constants::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH};
use crate::window::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const FALLBACK: Viewport = Viewport {
        width: FALLBACK_VIEWPORT_WIDTH,
        height: FALLBACK_VIEWPORT_HEIGHT,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Read `provider`, substituting the fallback for missing or empty
    /// readings.
    pub fn read_or_fallback<P: ViewportProvider + ?Sized>(provider: &P) -> Viewport {
        match provider.viewport() {
            Some(vp) if vp.width > 0 && vp.height > 0 => vp,
            other => {
                tracing::trace!(reading = ?other, "viewport unavailable; using fallback");
                Viewport::FALLBACK
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Synchronous source of the current viewport dimensions.
pub trait ViewportProvider {
    fn viewport(&self) -> Option<Viewport>;
}

impl<T: ViewportProvider + ?Sized> ViewportProvider for &T {
    fn viewport(&self) -> Option<Viewport> {
        (**self).viewport()
    }
}

/// Provider with a fixed reading. `FixedViewport(None)` models a host with
/// no window object at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedViewport(pub Option<Viewport>);

impl FixedViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self(Some(Viewport::new(width, height)))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl ViewportProvider for FixedViewport {
    fn viewport(&self) -> Option<Viewport> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_viewport_falls_back() {
        let vp = Viewport::read_or_fallback(&FixedViewport::unavailable());
        assert_eq!(vp, Viewport::new(1440, 900));
    }

    #[test]
    fn zero_sized_viewport_falls_back() {
        let vp = Viewport::read_or_fallback(&FixedViewport::new(0, 700));
        assert_eq!(vp, Viewport::FALLBACK);
    }

    #[test]
    fn reading_passes_through() {
        let provider = FixedViewport::new(1280, 800);
        assert_eq!(
            Viewport::read_or_fallback(&&provider),
            Viewport::new(1280, 800)
        );
    }
}
