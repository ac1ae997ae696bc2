//! Menu bar and dock.
//!
//! Both are views over the registry: every frame they re-derive what they
//! show (active app name, indicator dots) from the snapshot they are handed,
//! and they never hold window state of their own. What they do keep is the
//! hit rectangles of the last frame so clicks can be mapped back to
//! commands.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};

use crate::actions::ShellCommand;
use crate::catalog::{DOCK_ORDER, WINDOW_MENU_OPEN};
use crate::constants::HOME_APP_NAME;
use crate::state::ShellState;
use crate::ui::{fill, safe_set_string, truncate_to_width};
use crate::window::{WindowId, WindowRegistry};

/// Label the menu bar shows for the current registry state.
pub fn active_app_name(registry: &WindowRegistry) -> &str {
    registry
        .active_window()
        .map(|entry| entry.app_name())
        .unwrap_or(HOME_APP_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub id: WindowId,
    pub label: String,
    /// Lit while the window is open and not minimized.
    pub lit: bool,
}

/// Dock contents in [`DOCK_ORDER`], then any other registered window.
pub fn dock_items(registry: &WindowRegistry) -> Vec<DockItem> {
    let mut entries: Vec<_> = registry.entries().iter().collect();
    entries.sort_by_key(|entry| {
        DOCK_ORDER
            .iter()
            .position(|id| entry.id() == *id)
            .unwrap_or(DOCK_ORDER.len())
    });
    entries
        .into_iter()
        .map(|entry| DockItem {
            id: entry.id().clone(),
            label: entry.dock_label().to_string(),
            lit: entry.is_visible(),
        })
        .collect()
}

/// Rows of the Window menu, top to bottom: arrange, manage, then one
/// row per window in [`WINDOW_MENU_OPEN`].
pub fn window_menu_items() -> Vec<(&'static str, ShellCommand)> {
    let mut items = vec![
        ("Tile Side by Side", ShellCommand::TileSideBySide),
        ("Cascade Windows", ShellCommand::Cascade),
        ("Minimize All", ShellCommand::MinimizeAll),
        ("Bring All to Front", ShellCommand::BringAllToFront),
        ("Close All", ShellCommand::CloseAll),
    ];
    items.extend(
        WINDOW_MENU_OPEN
            .iter()
            .map(|&(label, id)| (label, ShellCommand::Open(WindowId::new(id)))),
    );
    items
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelHit {
    /// The "Window" title in the menu bar.
    WindowMenuTitle,
    /// A row of the open Window menu.
    WindowMenuItem(usize),
    /// Somewhere else on the menu bar.
    MenuBar,
    Dock(WindowId),
    /// Dock background between items.
    DockBackground,
}

#[derive(Debug, Default)]
pub struct Panel {
    menu_bar_area: Rect,
    dock_area: Rect,
    window_menu_title: Option<Rect>,
    window_menu_bounds: Option<Rect>,
    menu_item_hits: Vec<(Rect, usize)>,
    dock_hits: Vec<(Rect, WindowId)>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.window_menu_title = None;
        self.window_menu_bounds = None;
        self.menu_item_hits.clear();
        self.dock_hits.clear();
    }

    /// Split `area` into the menu bar row, the desktop, and the dock strip.
    pub fn split_area(&mut self, area: Rect, dock_rows: u16) -> (Rect, Rect, Rect) {
        let top_h = 1u16.min(area.height);
        let dock_h = dock_rows.min(area.height.saturating_sub(top_h));
        let menu_bar = Rect {
            height: top_h,
            ..area
        };
        let dock = Rect {
            y: area.y.saturating_add(area.height).saturating_sub(dock_h),
            height: dock_h,
            ..area
        };
        let desktop = Rect {
            y: area.y.saturating_add(top_h),
            height: area.height.saturating_sub(top_h).saturating_sub(dock_h),
            ..area
        };
        self.menu_bar_area = menu_bar;
        self.dock_area = dock;
        (menu_bar, desktop, dock)
    }

    pub fn render_menu_bar(
        &mut self,
        buffer: &mut Buffer,
        registry: &WindowRegistry,
        state: &ShellState,
    ) {
        let area = self.menu_bar_area.intersection(buffer.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(crate::theme::menu_bar_bg())
            .fg(crate::theme::menu_bar_fg());
        fill(buffer, area, base);

        let max_x = area.x.saturating_add(area.width);
        let y = area.y;
        let mut x = area.x.saturating_add(1);

        let logo_style = base
            .fg(crate::theme::accent())
            .add_modifier(Modifier::BOLD | Modifier::ITALIC);
        safe_set_string(buffer, area, x, y, "pk", logo_style);
        x = x.saturating_add(4);

        let app = active_app_name(registry);
        let app_style = base
            .fg(crate::theme::app_name_fg())
            .add_modifier(Modifier::BOLD);
        safe_set_string(buffer, area, x, y, app, app_style);
        x = x.saturating_add(app.chars().count() as u16 + 2);

        let title = "Window";
        let title_width = title.chars().count() as u16;
        if x.saturating_add(title_width) <= max_x {
            let style = if state.window_menu_open() {
                Style::default()
                    .bg(crate::theme::menu_selected_bg())
                    .fg(crate::theme::menu_selected_fg())
            } else {
                base
            };
            safe_set_string(buffer, area, x, y, title, style);
            self.window_menu_title = Some(Rect::new(x, y, title_width, 1));
        }

        let open = registry.entries().iter().filter(|e| e.is_open()).count();
        let status = format!("{open} open");
        let status_width = status.chars().count() as u16;
        if status_width.saturating_add(1) < area.width {
            let sx = max_x.saturating_sub(status_width + 1);
            if sx > x.saturating_add(title_width) {
                safe_set_string(buffer, area, sx, y, &status, base);
            }
        }
    }

    /// Paint the Window menu below its title. Call after the desktop so the
    /// dropdown lands on top of windows.
    pub fn render_window_menu(&mut self, buffer: &mut Buffer, state: &ShellState, bounds: Rect) {
        if !state.window_menu_open() {
            return;
        }
        let Some(anchor) = self.window_menu_title else {
            return;
        };
        let items = window_menu_items();
        let bounds = bounds.intersection(buffer.area);
        let label_width = items
            .iter()
            .map(|(label, _)| label.chars().count() as u16)
            .max()
            .unwrap_or(1);
        let width = (label_width + 4).min(bounds.width.saturating_sub(anchor.x.saturating_sub(bounds.x)));
        let height = (items.len() as u16 + 2)
            .min(bounds.height.saturating_sub(anchor.y.saturating_add(1).saturating_sub(bounds.y)));
        if width == 0 || height == 0 {
            return;
        }
        let menu = Rect::new(anchor.x, anchor.y.saturating_add(1), width, height);
        let menu_style = Style::default()
            .bg(crate::theme::menu_bg())
            .fg(crate::theme::menu_fg());
        let selected_style = Style::default()
            .bg(crate::theme::menu_selected_bg())
            .fg(crate::theme::menu_selected_fg())
            .add_modifier(Modifier::BOLD);
        fill(buffer, menu, menu_style);
        self.window_menu_bounds = Some(menu);

        for (idx, (label, _)) in items.iter().enumerate() {
            let y = menu.y.saturating_add(idx as u16 + 1);
            if y >= menu.y.saturating_add(menu.height).saturating_sub(1) {
                break;
            }
            let row = Rect::new(menu.x, y, menu.width, 1);
            let style = if idx == state.window_menu_selected() {
                fill(buffer, row, selected_style);
                selected_style
            } else {
                menu_style
            };
            let text = truncate_to_width(label, menu.width.saturating_sub(2) as usize);
            safe_set_string(buffer, menu, menu.x.saturating_add(2), y, &text, style);
            self.menu_item_hits.push((row, idx));
        }
    }

    pub fn render_dock(&mut self, buffer: &mut Buffer, registry: &WindowRegistry) {
        let area = self.dock_area.intersection(buffer.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(crate::theme::dock_bg())
            .fg(crate::theme::dock_fg());
        fill(buffer, area, base);

        let items = dock_items(registry);
        let chunks: Vec<String> = items.iter().map(|item| format!(" {} ", item.label)).collect();
        let total: u16 = chunks.iter().map(|c| c.chars().count() as u16).sum();
        let max_x = area.x.saturating_add(area.width);
        let mut x = if total < area.width {
            area.x + (area.width - total) / 2
        } else {
            area.x
        };
        let label_y = area.y.saturating_add(area.height.saturating_sub(2).min(area.height / 2));
        let dot_y = label_y.saturating_add(1);

        for (item, chunk) in items.iter().zip(chunks) {
            let width = chunk.chars().count() as u16;
            if x.saturating_add(width) > max_x {
                break;
            }
            safe_set_string(buffer, area, x, label_y, &chunk, base);
            if item.lit {
                let dot_x = x.saturating_add(width / 2);
                let dot_style = base.fg(crate::theme::dock_indicator());
                safe_set_string(buffer, area, dot_x, dot_y, "•", dot_style);
            }
            let hit_height = dot_y.saturating_add(1).saturating_sub(label_y);
            self.dock_hits
                .push((Rect::new(x, label_y, width, hit_height), item.id.clone()));
            x = x.saturating_add(width);
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<PanelHit> {
        let pos = Position::new(column, row);
        if let Some((_, idx)) = self.menu_item_hits.iter().find(|(rect, _)| rect.contains(pos)) {
            return Some(PanelHit::WindowMenuItem(*idx));
        }
        if self.window_menu_title.is_some_and(|rect| rect.contains(pos)) {
            return Some(PanelHit::WindowMenuTitle);
        }
        if self.menu_bar_area.contains(pos) {
            return Some(PanelHit::MenuBar);
        }
        if let Some((_, id)) = self.dock_hits.iter().find(|(rect, _)| rect.contains(pos)) {
            return Some(PanelHit::Dock(id.clone()));
        }
        if self.dock_area.contains(pos) {
            return Some(PanelHit::DockBackground);
        }
        None
    }

    /// Whether `(column, row)` falls inside the open Window menu, including
    /// its border rows.
    pub fn window_menu_contains(&self, column: u16, row: u16) -> bool {
        self.window_menu_bounds
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    fn registry() -> WindowRegistry {
        WindowRegistry::portfolio(Viewport::FALLBACK).expect("portfolio catalog is valid")
    }

    #[test]
    fn app_name_follows_active_window() {
        let mut reg = registry();
        assert_eq!(active_app_name(&reg), "Finder");
        reg.open("browser");
        assert_eq!(active_app_name(&reg), "Safari");
        reg.open("chat");
        assert_eq!(active_app_name(&reg), "Pai");
        reg.minimize("chat");
        assert_eq!(active_app_name(&reg), "Safari");
        reg.close("browser");
        assert_eq!(active_app_name(&reg), "Finder");
    }

    #[test]
    fn dock_indicator_tracks_visibility() {
        let mut reg = registry();
        reg.open("cv");
        reg.open("chat");
        reg.minimize("chat");
        let items = dock_items(&reg);
        let lit: Vec<&str> = items
            .iter()
            .filter(|item| item.lit)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(lit, vec!["cv"]);
        assert_eq!(items.len(), reg.entries().len());
    }

    #[test]
    fn dock_follows_dock_order() {
        let items = dock_items(&registry());
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, DOCK_ORDER);
    }

    #[test]
    fn unlisted_windows_trail_the_dock() {
        let catalog = vec![
            crate::catalog::AppSpec::new("notes", "Notes", crate::window::Size::new(400, 300)),
            crate::catalog::AppSpec::new("cv", "Resume", crate::window::Size::new(400, 300)),
            crate::catalog::AppSpec::new("chat", "Pai", crate::window::Size::new(400, 300)),
        ];
        let reg = WindowRegistry::from_catalog(&catalog, Viewport::FALLBACK).expect("valid");
        let ids: Vec<String> = dock_items(&reg)
            .into_iter()
            .map(|item| item.id.to_string())
            .collect();
        assert_eq!(ids, vec!["chat", "cv", "notes"]);
    }

    #[test]
    fn window_menu_ends_with_open_section() {
        let items = window_menu_items();
        let opens: Vec<(&str, String)> = items
            .iter()
            .filter_map(|(label, command)| match command {
                ShellCommand::Open(id) => Some((*label, id.to_string())),
                _ => None,
            })
            .collect();
        assert_eq!(
            opens,
            vec![
                ("Projects", "projects".to_string()),
                ("Pai", "chat".to_string()),
                ("Browser", "browser".to_string()),
                ("Messages", "messages".to_string()),
                ("Video Call", "videocall".to_string()),
                ("My Story", "mystory".to_string()),
            ]
        );
        assert_eq!(items.len(), 11);
    }

    #[test]
    fn split_area_reserves_menu_and_dock() {
        let mut panel = Panel::new();
        let (menu, desktop, dock) = panel.split_area(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(menu, Rect::new(0, 0, 80, 1));
        assert_eq!(desktop, Rect::new(0, 1, 80, 20));
        assert_eq!(dock, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn dock_hits_map_to_window_ids() {
        let reg = registry();
        let mut panel = Panel::new();
        let area = Rect::new(0, 0, 160, 24);
        let mut buf = Buffer::empty(area);
        panel.split_area(area, 3);
        panel.begin_frame();
        panel.render_dock(&mut buf, &reg);
        let (rect, id) = panel.dock_hits.first().cloned().expect("dock rendered");
        assert_eq!(id.as_str(), "projects");
        assert_eq!(
            panel.hit_test(rect.x + 1, rect.y),
            Some(PanelHit::Dock(WindowId::new("projects")))
        );
    }

    #[test]
    fn window_menu_rows_are_hit_testable() {
        let reg = registry();
        let mut state = ShellState::new();
        state.open_window_menu();
        let mut panel = Panel::new();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        panel.split_area(area, 3);
        panel.begin_frame();
        panel.render_menu_bar(&mut buf, &reg, &state);
        panel.render_window_menu(&mut buf, &state, area);
        let title = panel.window_menu_title.expect("title rendered");
        assert_eq!(panel.hit_test(title.x, 0), Some(PanelHit::WindowMenuTitle));
        // first row sits one below the dropdown's top border
        assert_eq!(
            panel.hit_test(title.x + 2, 2),
            Some(PanelHit::WindowMenuItem(0))
        );
        assert!(panel.window_menu_contains(title.x, 1));
    }
}
