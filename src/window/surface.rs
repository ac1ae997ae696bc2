//! Window surface: turns the registry snapshot into frames to paint and
//! turns gestures on those frames back into registry operations.
//!
//! The only state kept here is the geometry the drag/resize frame has
//! committed for windows that are currently rendered. Each record is tagged
//! with the entry's geometry epoch, so it goes stale as soon as the window
//! stops rendering free-form (closed, minimized or maximized) even when no
//! layout runs in between. The next free-form render then starts from the
//! entry's default geometry.

use std::collections::BTreeMap;

use crate::constants::{
    DOCK_RESERVED_HEIGHT, MENU_BAR_HEIGHT, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::layout::floating::clamp_frame;
use crate::layout::{desktop_area, maximized_rect, rect_contains};
use crate::viewport::Viewport;
use crate::window::{FloatRect, Point, Size, WindowEntry, WindowId, WindowRegistry};

/// Height of a window's title bar, which doubles as its drag handle.
pub const TITLE_BAR_HEIGHT: u32 = 28;
const TRAFFIC_LIGHT_SIZE: u32 = 14;
const TRAFFIC_LIGHT_GAP: u32 = 8;
const TRAFFIC_LIGHT_INSET: u32 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub menu_bar_height: u32,
    pub dock_reserved_height: u32,
    pub min_size: Size,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: MENU_BAR_HEIGHT,
            dock_reserved_height: DOCK_RESERVED_HEIGHT,
            min_size: Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TrafficLight {
    Close,
    Minimize,
    Maximize,
}

impl TrafficLight {
    pub const ALL: [TrafficLight; 3] = [
        TrafficLight::Close,
        TrafficLight::Minimize,
        TrafficLight::Maximize,
    ];

    fn slot(self) -> u32 {
        match self {
            TrafficLight::Close => 0,
            TrafficLight::Minimize => 1,
            TrafficLight::Maximize => 2,
        }
    }
}

/// A user intent reported against one window's chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Pointer pressed anywhere on the window.
    PointerDown(WindowId),
    TrafficLight(WindowId, TrafficLight),
    /// A title-bar drag finished at `position`.
    MoveCommitted { id: WindowId, position: Point },
    /// A resize finished. Edge resizes may move the origin too.
    ResizeCommitted { id: WindowId, rect: FloatRect },
    /// The pointer interaction was cancelled before it committed.
    Cancelled(WindowId),
}

/// Render-ready description of one visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    pub id: WindowId,
    pub title: String,
    pub rect: FloatRect,
    pub z_index: u64,
    pub focused: bool,
    pub maximized: bool,
}

impl WindowFrame {
    /// Maximized frames can be neither dragged nor resized.
    pub fn draggable(&self) -> bool {
        !self.maximized
    }

    pub fn resizable(&self) -> bool {
        !self.maximized
    }

    pub fn title_bar(&self) -> FloatRect {
        FloatRect {
            height: TITLE_BAR_HEIGHT.min(self.rect.height),
            ..self.rect
        }
    }

    pub fn traffic_light_rect(&self, light: TrafficLight) -> FloatRect {
        let offset = TRAFFIC_LIGHT_INSET + light.slot() * (TRAFFIC_LIGHT_SIZE + TRAFFIC_LIGHT_GAP);
        let bar = self.title_bar();
        FloatRect {
            x: self.rect.x.saturating_add(offset as i32),
            y: bar.y
                .saturating_add((bar.height.saturating_sub(TRAFFIC_LIGHT_SIZE) / 2) as i32),
            width: TRAFFIC_LIGHT_SIZE,
            height: TRAFFIC_LIGHT_SIZE.min(bar.height),
        }
    }

    pub fn traffic_light_at(&self, point: Point) -> Option<TrafficLight> {
        TrafficLight::ALL
            .into_iter()
            .find(|light| rect_contains(self.traffic_light_rect(*light), point))
    }

    pub fn in_title_bar(&self, point: Point) -> bool {
        rect_contains(self.title_bar(), point)
    }
}

/// Topmost frame containing `point`. `frames` must be in paint order, as
/// returned by [`WindowSurface::layout`].
pub fn window_at(frames: &[WindowFrame], point: Point) -> Option<&WindowFrame> {
    frames.iter().rev().find(|frame| frame.rect.contains(point))
}

#[derive(Debug, Clone, Default)]
pub struct WindowSurface {
    config: SurfaceConfig,
    committed: BTreeMap<WindowId, (u64, FloatRect)>,
}

impl WindowSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            committed: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Drop committed geometry for windows no longer rendered free-form.
    pub fn sync(&mut self, registry: &WindowRegistry) {
        self.committed.retain(|id, (epoch, _)| {
            let keep = registry.get(id.as_str()).is_some_and(|entry| {
                entry.is_visible()
                    && !entry.is_maximized()
                    && entry.geometry_epoch() == *epoch
            });
            if !keep {
                tracing::trace!(window_id = %id, "discarding committed frame geometry");
            }
            keep
        });
    }

    /// Free-form geometry for `entry`: its default position shifted below
    /// the menu bar, at its default size.
    pub fn default_rect(&self, entry: &WindowEntry) -> FloatRect {
        FloatRect::new(
            entry
                .default_position()
                .offset(0, self.config.menu_bar_height as i32),
            entry.default_size(),
        )
    }

    fn current_rect(&self, entry: &WindowEntry, viewport: Viewport) -> FloatRect {
        if entry.is_maximized() {
            return maximized_rect(viewport, &self.config);
        }
        match self.committed.get(entry.id()) {
            Some(&(epoch, rect)) if epoch == entry.geometry_epoch() => rect,
            _ => self.default_rect(entry),
        }
    }

    /// Frames for every visible window, bottom-most first.
    pub fn layout(&mut self, registry: &WindowRegistry, viewport: Viewport) -> Vec<WindowFrame> {
        self.sync(registry);
        let active = registry.active_window_id();
        let mut visible: Vec<&WindowEntry> = registry
            .entries()
            .iter()
            .filter(|entry| entry.is_visible())
            .collect();
        visible.sort_by_key(|entry| entry.z_index());
        visible
            .into_iter()
            .map(|entry| WindowFrame {
                id: entry.id().clone(),
                title: entry.title().to_string(),
                rect: self.current_rect(entry, viewport),
                z_index: entry.z_index(),
                focused: active == Some(entry.id()),
                maximized: entry.is_maximized(),
            })
            .collect()
    }

    /// Forward a gesture to the registry, or record committed geometry.
    pub fn handle_gesture(
        &mut self,
        registry: &mut WindowRegistry,
        viewport: Viewport,
        gesture: Gesture,
    ) {
        let id = match &gesture {
            Gesture::PointerDown(id)
            | Gesture::TrafficLight(id, _)
            | Gesture::MoveCommitted { id, .. }
            | Gesture::ResizeCommitted { id, .. }
            | Gesture::Cancelled(id) => id.clone(),
        };
        let Some(entry) = registry.get(id.as_str()).filter(|entry| entry.is_visible()) else {
            tracing::trace!(window_id = %id, ?gesture, "gesture for hidden or unknown window");
            return;
        };
        let maximized = entry.is_maximized();
        let epoch = entry.geometry_epoch();
        let current = self.current_rect(entry, viewport);

        match gesture {
            Gesture::PointerDown(_) => registry.focus(id.as_str()),
            Gesture::TrafficLight(_, TrafficLight::Close) => registry.close(id.as_str()),
            Gesture::TrafficLight(_, TrafficLight::Minimize) => registry.minimize(id.as_str()),
            Gesture::TrafficLight(_, TrafficLight::Maximize) => {
                registry.toggle_maximize(id.as_str())
            }
            Gesture::MoveCommitted { position, .. } => {
                if maximized {
                    return;
                }
                let rect = FloatRect::new(position, current.size());
                self.commit(id, epoch, rect, current, viewport);
            }
            Gesture::ResizeCommitted { rect, .. } => {
                if maximized {
                    return;
                }
                self.commit(id, epoch, rect, current, viewport);
            }
            Gesture::Cancelled(_) => {
                tracing::trace!(window_id = %id, "pointer interaction cancelled");
            }
        }
        self.sync(registry);
    }

    fn commit(
        &mut self,
        id: WindowId,
        epoch: u64,
        rect: FloatRect,
        current: FloatRect,
        viewport: Viewport,
    ) {
        let bounds = desktop_area(viewport, &self.config);
        let clamped = clamp_frame(rect, current.size(), self.config.min_size, bounds);
        if clamped != rect {
            tracing::trace!(window_id = %id, requested = ?rect, ?clamped, "clamped frame");
        }
        self.committed.insert(id, (epoch, clamped));
    }
}
