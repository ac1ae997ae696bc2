use std::fmt;

use crate::catalog::{CASCADE, TILE_SIDE_BY_SIDE};
use crate::window::{WindowId, WindowRegistry};

/// Everything the dock, menu bar and keyboard can ask of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShellCommand {
    Open(WindowId),
    Close(WindowId),
    Minimize(WindowId),
    ToggleMaximize(WindowId),
    Focus(WindowId),
    // Window menu
    MinimizeAll,
    BringAllToFront,
    CloseAll,
    TileSideBySide,
    Cascade,
}

impl ShellCommand {
    pub fn apply(&self, registry: &mut WindowRegistry) {
        tracing::debug!(command = %self, "applying shell command");
        match self {
            ShellCommand::Open(id) => registry.open(id.as_str()),
            ShellCommand::Close(id) => registry.close(id.as_str()),
            ShellCommand::Minimize(id) => registry.minimize(id.as_str()),
            ShellCommand::ToggleMaximize(id) => registry.toggle_maximize(id.as_str()),
            ShellCommand::Focus(id) => registry.focus(id.as_str()),
            ShellCommand::MinimizeAll => registry.minimize_all(),
            ShellCommand::BringAllToFront => registry.bring_all_to_front(),
            ShellCommand::CloseAll => registry.close_all(),
            ShellCommand::TileSideBySide => registry.open_many(TILE_SIDE_BY_SIDE),
            ShellCommand::Cascade => registry.open_many(CASCADE),
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellCommand::Open(id) => write!(f, "Open {id}"),
            ShellCommand::Close(id) => write!(f, "Close {id}"),
            ShellCommand::Minimize(id) => write!(f, "Minimize {id}"),
            ShellCommand::ToggleMaximize(id) => write!(f, "Zoom {id}"),
            ShellCommand::Focus(id) => write!(f, "Focus {id}"),
            ShellCommand::MinimizeAll => f.write_str("Minimize All"),
            ShellCommand::BringAllToFront => f.write_str("Bring All to Front"),
            ShellCommand::CloseAll => f.write_str("Close All"),
            ShellCommand::TileSideBySide => f.write_str("Tile Side by Side"),
            ShellCommand::Cascade => f.write_str("Cascade Windows"),
        }
    }
}
