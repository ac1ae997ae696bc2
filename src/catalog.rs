//! The fixed set of applications the shell knows about.
//!
//! Entries are registered once, in catalog order, when the registry is built.
//! Catalog order is also the iteration order of every bulk action.

use crate::constants::HOME_APP_NAME;
use crate::window::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub id: String,
    pub title: String,
    /// Short name shown in the menu bar while this app is active.
    pub app_name: String,
    /// Dock label.
    pub dock_label: String,
    pub size: Size,
    /// Per-window nudge applied after centering.
    pub jitter: (i32, i32),
}

impl AppSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, size: Size) -> Self {
        let id = id.into();
        let title = title.into();
        Self {
            app_name: title.clone(),
            dock_label: title.clone(),
            id,
            title,
            size,
            jitter: (0, 0),
        }
    }

    pub fn with_jitter(mut self, dx: i32, dy: i32) -> Self {
        self.jitter = (dx, dy);
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    pub fn with_dock_label(mut self, label: impl Into<String>) -> Self {
        self.dock_label = label.into();
        self
    }
}

/// Applications hosted by the portfolio desktop.
pub fn portfolio_catalog() -> Vec<AppSpec> {
    vec![
        AppSpec::new("projects", "Projects", Size::new(960, 600)).with_app_name("Finder"),
        AppSpec::new("chat", "Pai", Size::new(420, 580)).with_jitter(40, 0),
        AppSpec::new("videocall", "Video Call — Digital Twin", Size::new(560, 460))
            .with_jitter(-20, 0)
            .with_app_name("FaceTime")
            .with_dock_label("Video Call"),
        AppSpec::new("messages", "Messages", Size::new(460, 520)).with_jitter(60, 0),
        AppSpec::new("browser", "Browser", Size::new(1060, 640)).with_app_name("Safari"),
        AppSpec::new("cv", "Resume — Pranav Kowadkar", Size::new(720, 560))
            .with_jitter(30, 0)
            .with_app_name("Preview")
            .with_dock_label("Resume"),
        AppSpec::new("mystory", "My Story — Pranav Kowadkar", Size::new(900, 620))
            .with_app_name("My Story")
            .with_dock_label("My Story"),
        // No menu-bar name of its own; the bar keeps showing the home label.
        AppSpec::new("terminal", "Terminal — pk@portfolio", Size::new(640, 420))
            .with_app_name(HOME_APP_NAME)
            .with_dock_label("Terminal"),
    ]
}

/// Ids opened by the "Tile Side by Side" arrangement.
pub const TILE_SIDE_BY_SIDE: &[&str] = &["projects", "browser"];

/// Ids opened, in order, by the "Cascade Windows" arrangement.
pub const CASCADE: &[&str] = &["projects", "chat", "browser", "messages"];

/// Dock order, left to right. Ids missing here follow in registration order.
pub const DOCK_ORDER: &[&str] = &[
    "projects", "chat", "mystory", "videocall", "messages", "browser", "cv", "terminal",
];

/// The Window menu's "Open" section: row label and the window it opens.
pub const WINDOW_MENU_OPEN: &[(&str, &str)] = &[
    ("Projects", "projects"),
    ("Pai", "chat"),
    ("Browser", "browser"),
    ("Messages", "messages"),
    ("Video Call", "videocall"),
    ("My Story", "mystory"),
];
