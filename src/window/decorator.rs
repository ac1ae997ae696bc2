use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::window::TrafficLight;

/// Cell-space description of one window's chrome.
#[derive(Debug, Clone)]
pub struct WindowChrome<'a> {
    pub rect: Rect,
    pub title: &'a str,
    pub focused: bool,
    pub maximized: bool,
    /// Cell holding each traffic light, when it lands on screen.
    pub lights: [Option<(u16, u16)>; 3],
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Paint chrome for `chrome.rect`, clipped to `bounds`. Windows are
    /// painted bottom-most first, so later calls overwrite earlier ones.
    fn render_window(&self, buffer: &mut Buffer, chrome: &WindowChrome<'_>, bounds: Rect);
}

#[derive(Debug, Default)]
pub struct SpringboardDecorator;

impl SpringboardDecorator {
    fn light_style(light: TrafficLight, focused: bool) -> Style {
        if !focused {
            return Style::default().fg(Color::DarkGray);
        }
        let color = match light {
            TrafficLight::Close => Color::Red,
            TrafficLight::Minimize => Color::Yellow,
            TrafficLight::Maximize => Color::Green,
        };
        Style::default().fg(color)
    }
}

impl WindowDecorator for SpringboardDecorator {
    fn render_window(&self, buffer: &mut Buffer, chrome: &WindowChrome<'_>, bounds: Rect) {
        let visible = chrome.rect.intersection(bounds).intersection(buffer.area);
        if visible.width == 0 || visible.height == 0 {
            return;
        }

        let bar_style = if chrome.focused {
            Style::default()
                .bg(Color::Rgb(48, 48, 52))
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::Rgb(38, 38, 40)).fg(Color::DarkGray)
        };
        let body_style = Style::default().bg(Color::Rgb(26, 26, 28)).fg(Color::Gray);
        let border_style = Style::default().bg(Color::Rgb(26, 26, 28)).fg(Color::DarkGray);

        let left = chrome.rect.x;
        let right = chrome.rect.x.saturating_add(chrome.rect.width).saturating_sub(1);
        let top = chrome.rect.y;
        let bottom = chrome.rect.y.saturating_add(chrome.rect.height).saturating_sub(1);
        let inside = |x: u16, y: u16| {
            x >= visible.x
                && x < visible.x.saturating_add(visible.width)
                && y >= visible.y
                && y < visible.y.saturating_add(visible.height)
        };

        for y in visible.y..visible.y.saturating_add(visible.height) {
            for x in visible.x..visible.x.saturating_add(visible.width) {
                let Some(cell) = buffer.cell_mut((x, y)) else {
                    continue;
                };
                if y == top {
                    cell.set_symbol(" ");
                    cell.set_style(bar_style);
                } else if y == bottom && chrome.rect.height > 1 {
                    let symbol = if x == left {
                        "╰"
                    } else if x == right {
                        "╯"
                    } else {
                        "─"
                    };
                    cell.set_symbol(symbol);
                    cell.set_style(border_style);
                } else if x == left || x == right {
                    cell.set_symbol("│");
                    cell.set_style(border_style);
                } else {
                    cell.set_symbol(" ");
                    cell.set_style(body_style);
                }
            }
        }

        // Title, centered in the bar
        let title_len = chrome.title.chars().count() as u16;
        let bar_width = chrome.rect.width;
        if title_len > 0 && title_len < bar_width {
            let start_x = left.saturating_add((bar_width - title_len) / 2);
            for (idx, ch) in chrome.title.chars().enumerate() {
                let x = start_x.saturating_add(idx as u16);
                if inside(x, top)
                    && let Some(cell) = buffer.cell_mut((x, top))
                {
                    cell.set_symbol(&ch.to_string());
                    cell.set_style(bar_style);
                }
            }
        }

        for (light, position) in TrafficLight::ALL.into_iter().zip(chrome.lights) {
            let Some((x, y)) = position else {
                continue;
            };
            if inside(x, y)
                && let Some(cell) = buffer.cell_mut((x, y))
            {
                cell.set_symbol(if chrome.maximized && light == TrafficLight::Maximize {
                    "◉"
                } else {
                    "●"
                });
                cell.set_style(bar_style.patch(Self::light_style(light, chrome.focused)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
        buf.cell((x, y))
            .map(|c| c.symbol().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn paints_title_and_lights() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        let chrome = WindowChrome {
            rect: Rect::new(0, 0, 20, 6),
            title: "Pai",
            focused: true,
            maximized: false,
            lights: [Some((1, 0)), Some((3, 0)), Some((5, 0))],
        };
        SpringboardDecorator.render_window(&mut buf, &chrome, area);
        assert_eq!(symbol(&buf, 1, 0), "●");
        assert_eq!(symbol(&buf, 5, 0), "●");
        // title centered: (20 - 3) / 2 = 8
        assert_eq!(symbol(&buf, 8, 0), "P");
        assert_eq!(symbol(&buf, 0, 2), "│");
        assert_eq!(symbol(&buf, 0, 5), "╰");
    }

    #[test]
    fn clips_to_bounds() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        let chrome = WindowChrome {
            rect: Rect::new(5, 1, 20, 10),
            title: "Browser",
            focused: false,
            maximized: false,
            lights: [None, None, None],
        };
        SpringboardDecorator.render_window(&mut buf, &chrome, Rect::new(0, 1, 10, 2));
        assert_eq!(symbol(&buf, 5, 3), " ");
        assert_eq!(symbol(&buf, 5, 2), "│");
    }
}
