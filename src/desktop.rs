//! The shell: owns the registry and surface, routes terminal input to them,
//! and paints the desktop each frame.
//!
//! Geometry lives in desktop pixels. The terminal is treated as a pixel
//! canvas of `cols * cell.width` by `rows * cell.height`, and every frame is
//! scaled down to cells only at paint and hit-test time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};
use tracing::{debug, trace, warn};

use crate::actions::ShellCommand;
use crate::config::{CellMetrics, ShellConfig};
use crate::keybindings::{Action, KeyBindings};
use crate::layout::rects_intersect;
use crate::panel::{Panel, PanelHit, window_menu_items};
use crate::state::ShellState;
use crate::ui::{UiFrame, fill};
use crate::viewport::{Viewport, ViewportProvider};
use crate::window::decorator::{SpringboardDecorator, WindowChrome, WindowDecorator};
use crate::window::surface::window_at;
use crate::window::{
    CatalogError, FloatRect, Gesture, Point, Size, TrafficLight, WindowFrame, WindowId,
    WindowRegistry, WindowSurface,
};

const DOUBLE_CLICK: Duration = Duration::from_millis(500);

/// Reads the viewport from the controlling terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalViewport {
    pub cell: CellMetrics,
}

impl ViewportProvider for TerminalViewport {
    fn viewport(&self) -> Option<Viewport> {
        let (cols, rows) = crossterm::terminal::size().ok()?;
        Some(self.cell.viewport(Rect::new(0, 0, cols, rows)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InteractionKind {
    Move,
    Resize,
}

/// A title-bar drag or corner resize in flight. Nothing reaches the
/// surface until the button is released.
#[derive(Debug, Clone)]
struct Interaction {
    id: WindowId,
    kind: InteractionKind,
    start: Point,
    current: Point,
    origin: FloatRect,
}

impl Interaction {
    fn preview(&self) -> FloatRect {
        let dx = self.current.x.saturating_sub(self.start.x);
        let dy = self.current.y.saturating_sub(self.start.y);
        match self.kind {
            InteractionKind::Move => FloatRect::new(self.origin.position().offset(dx, dy), self.origin.size()),
            InteractionKind::Resize => {
                let grow = |len: u32, delta: i32| (len as i64 + delta as i64).max(0) as u32;
                FloatRect::new(
                    self.origin.position(),
                    Size::new(grow(self.origin.width, dx), grow(self.origin.height, dy)),
                )
            }
        }
    }

    fn commit(&self) -> Gesture {
        let rect = self.preview();
        match self.kind {
            InteractionKind::Move => Gesture::MoveCommitted {
                id: self.id.clone(),
                position: rect.position(),
            },
            InteractionKind::Resize => Gesture::ResizeCommitted {
                id: self.id.clone(),
                rect,
            },
        }
    }
}

pub struct Desktop {
    registry: WindowRegistry,
    surface: WindowSurface,
    state: ShellState,
    panel: Panel,
    bindings: KeyBindings,
    decorator: Arc<dyn WindowDecorator>,
    cell: CellMetrics,
    viewport: Viewport,
    interaction: Option<Interaction>,
    last_header_click: Option<(WindowId, Instant)>,
}

impl Desktop {
    pub fn new<P: ViewportProvider + ?Sized>(
        config: &ShellConfig,
        provider: &P,
    ) -> Result<Self, CatalogError> {
        let viewport = Viewport::read_or_fallback(provider);
        let mut registry = WindowRegistry::portfolio(viewport)?;
        for id in &config.open_at_start {
            if registry.contains(id) {
                registry.open(id);
            } else {
                warn!(window_id = %id, "ignoring unknown window requested at startup");
            }
        }
        let bindings = KeyBindings::shell(registry.entries().len());
        debug!(?viewport, windows = registry.entries().len(), "desktop ready");
        Ok(Self {
            registry,
            surface: WindowSurface::new(config.surface),
            state: ShellState::new(),
            panel: Panel::new(),
            bindings,
            decorator: Arc::new(SpringboardDecorator),
            cell: config.cell,
            viewport,
            interaction: None,
            last_header_click: None,
        })
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn should_quit(&self) -> bool {
        self.state.quit_requested()
    }

    /// Current frames, bottom-most first, without any drag preview.
    pub fn frames(&mut self) -> Vec<WindowFrame> {
        self.surface.layout(&self.registry, self.viewport)
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn run_command(&mut self, command: ShellCommand) {
        command.apply(&mut self.registry);
        self.surface.sync(&self.registry);
    }

    fn gesture(&mut self, gesture: Gesture) {
        self.surface
            .handle_gesture(&mut self.registry, self.viewport, gesture);
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => {
                self.viewport = self.cell.viewport(Rect::new(0, 0, *cols, *rows));
                trace!(viewport = ?self.viewport, "terminal resized");
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let Some(action) = self.bindings.action_for_key(key) else {
            return;
        };
        trace!(%action, "key action");
        if self.state.window_menu_open() {
            let len = window_menu_items().len();
            match action {
                Action::MenuUp => return self.state.move_selection(-1, len),
                Action::MenuDown => return self.state.move_selection(1, len),
                Action::MenuSelect => return self.select_menu_item(self.state.window_menu_selected()),
                _ => {}
            }
        }
        match action {
            Action::Quit => self.state.request_quit(),
            Action::OpenApp(n) => {
                if let Some(id) = self.registry.entries().get(n).map(|e| e.id().clone()) {
                    self.run_command(ShellCommand::Open(id));
                }
            }
            Action::CycleFocus => self.cycle_focus(),
            Action::MinimizeActive => self.on_active(ShellCommand::Minimize),
            Action::ToggleMaximizeActive => self.on_active(ShellCommand::ToggleMaximize),
            Action::CloseActive => self.on_active(ShellCommand::Close),
            Action::MinimizeAll => self.run_command(ShellCommand::MinimizeAll),
            Action::BringAllToFront => self.run_command(ShellCommand::BringAllToFront),
            Action::CloseAll => self.run_command(ShellCommand::CloseAll),
            Action::TileSideBySide => self.run_command(ShellCommand::TileSideBySide),
            Action::Cascade => self.run_command(ShellCommand::Cascade),
            Action::ToggleWindowMenu => self.state.toggle_window_menu(),
            Action::MenuUp | Action::MenuDown | Action::MenuSelect => {}
            Action::Cancel => self.cancel(),
        }
    }

    fn on_active(&mut self, command: fn(WindowId) -> ShellCommand) {
        if let Some(id) = self.registry.active_window_id().cloned() {
            self.run_command(command(id));
        }
    }

    /// Raise the bottom-most visible window, rotating the stack.
    fn cycle_focus(&mut self) {
        let bottom = self
            .registry
            .entries()
            .iter()
            .filter(|e| e.is_visible())
            .min_by_key(|e| e.z_index())
            .map(|e| e.id().clone());
        if let Some(id) = bottom {
            self.run_command(ShellCommand::Focus(id));
        }
    }

    pub fn cancel(&mut self) {
        if let Some(interaction) = self.interaction.take() {
            self.gesture(Gesture::Cancelled(interaction.id));
        } else if self.state.window_menu_open() {
            self.state.close_window_menu();
        }
    }

    fn select_menu_item(&mut self, idx: usize) {
        self.state.close_window_menu();
        if let Some((label, command)) = window_menu_items().into_iter().nth(idx) {
            debug!(item = label, "window menu");
            self.run_command(command);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let point = self.cell.cell_center(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_pointer_down(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(interaction) = self.interaction.as_mut() {
                    interaction.current = point;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(mut interaction) = self.interaction.take() {
                    interaction.current = point;
                    if interaction.preview() == interaction.origin {
                        trace!(window_id = %interaction.id, "pointer released in place");
                    } else {
                        self.gesture(interaction.commit());
                    }
                }
            }
            _ => {}
        }
    }

    fn on_pointer_down(&mut self, column: u16, row: u16) {
        if self.interaction.is_some() {
            return;
        }
        if self.state.window_menu_open() {
            match self.panel.hit_test(column, row) {
                Some(PanelHit::WindowMenuItem(idx)) => self.select_menu_item(idx),
                _ => self.state.close_window_menu(),
            }
            return;
        }
        match self.panel.hit_test(column, row) {
            Some(PanelHit::WindowMenuTitle) => return self.state.open_window_menu(),
            Some(PanelHit::Dock(id)) => return self.run_command(ShellCommand::Open(id)),
            Some(PanelHit::MenuBar | PanelHit::DockBackground | PanelHit::WindowMenuItem(_)) => {
                return;
            }
            None => {}
        }

        let point = self.cell.cell_center(column, row);
        let frames = self.frames();
        let Some(frame) = window_at(&frames, point).cloned() else {
            return;
        };
        self.gesture(Gesture::PointerDown(frame.id.clone()));
        if let Some(light) = self.light_cell_hit(&frame, column, row) {
            self.last_header_click = None;
            return self.gesture(Gesture::TrafficLight(frame.id, light));
        }

        let Some(cells) = self.cell.to_cells(frame.rect) else {
            return;
        };
        let last_col = cells.x.saturating_add(cells.width).saturating_sub(1);
        let last_row = cells.y.saturating_add(cells.height).saturating_sub(1);
        if row == cells.y {
            let now = Instant::now();
            if let Some((prev_id, prev)) = self.last_header_click.take()
                && prev_id == frame.id
                && now.duration_since(prev) <= DOUBLE_CLICK
            {
                return self.gesture(Gesture::TrafficLight(frame.id, TrafficLight::Maximize));
            }
            self.last_header_click = Some((frame.id.clone(), now));
            if frame.draggable() {
                self.begin(frame, InteractionKind::Move, point);
            }
        } else if column == last_col && row == last_row && frame.resizable() {
            self.begin(frame, InteractionKind::Resize, point);
        }
    }

    fn begin(&mut self, frame: WindowFrame, kind: InteractionKind, start: Point) {
        trace!(window_id = %frame.id, ?kind, "pointer interaction started");
        self.interaction = Some(Interaction {
            id: frame.id,
            kind,
            start,
            current: start,
            origin: frame.rect,
        });
    }

    fn light_cells(&self, frame: &WindowFrame) -> [Option<(u16, u16)>; 3] {
        TrafficLight::ALL.map(|light| self.cell.first_cell_in(frame.traffic_light_rect(light)))
    }

    fn light_cell_hit(&self, frame: &WindowFrame, column: u16, row: u16) -> Option<TrafficLight> {
        TrafficLight::ALL
            .into_iter()
            .zip(self.light_cells(frame))
            .find(|(_, cell)| *cell == Some((column, row)))
            .map(|(light, _)| light)
    }

    fn dock_rows(&self) -> u16 {
        let reserved = self.surface.config().dock_reserved_height;
        reserved.div_ceil(self.cell.height).clamp(1, 3) as u16
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        self.viewport = self.cell.viewport(area);
        self.panel.begin_frame();
        let (_, desktop, _) = self.panel.split_area(area, self.dock_rows());
        fill(
            frame.buffer_mut(),
            desktop,
            Style::default().bg(crate::theme::desktop_bg()),
        );

        let mut frames = self.frames();
        if let Some(interaction) = &self.interaction
            && let Some(dragged) = frames.iter_mut().find(|f| f.id == interaction.id)
        {
            dragged.rect = interaction.preview();
        }
        let canvas = FloatRect::new(Point::new(0, 0), self.viewport.size());
        for window in frames.iter().filter(|w| rects_intersect(w.rect, canvas)) {
            self.paint_window(frame, window, desktop);
        }

        self.panel
            .render_menu_bar(frame.buffer_mut(), &self.registry, &self.state);
        self.panel.render_dock(frame.buffer_mut(), &self.registry);
        self.panel
            .render_window_menu(frame.buffer_mut(), &self.state, area);
    }

    fn paint_window(&self, frame: &mut UiFrame<'_>, window: &WindowFrame, bounds: Rect) {
        let Some(rect) = self.cell.to_cells(window.rect) else {
            return;
        };
        let chrome = WindowChrome {
            rect,
            title: &window.title,
            focused: window.focused,
            maximized: window.maximized,
            lights: self.light_cells(window),
        };
        self.decorator
            .render_window(frame.buffer_mut(), &chrome, bounds);

        let body = Rect {
            x: rect.x.saturating_add(2),
            y: rect.y.saturating_add(2),
            width: rect.width.saturating_sub(4),
            height: rect.height.saturating_sub(3),
        }
        .intersection(bounds);
        if body.width == 0 || body.height == 0 {
            return;
        }
        let text = format!(
            "{}\n{} x {} px",
            window.title, window.rect.width, window.rect.height
        );
        let style = Style::default()
            .bg(ratatui::style::Color::Rgb(26, 26, 28))
            .fg(ratatui::style::Color::Gray);
        frame.render_widget(
            Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
            body,
        );
    }
}
