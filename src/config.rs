use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use ratatui::layout::Rect;
use thiserror::Error;

use crate::viewport::Viewport;
use crate::window::{FloatRect, Point, SurfaceConfig};

const KEYS_HELP: &str = indoc! {"
    Keys:
      1-8        open an application
      Tab        focus the next open window
      m / z / w  minimize, maximize, close the active window
      M / F / W  minimize all, bring all to front, close all
      t / c      tile side by side, cascade windows
      F2         open the Window menu (Up/Down, Enter)
      Esc        cancel a drag, close the Window menu
      q, Ctrl+c  quit

    Mouse: click the dock to open, drag a title bar to move, drag the
    bottom-right corner to resize, double-click a title bar to zoom.
"};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "springboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A springboard-style desktop shell hosted in the terminal",
    after_help = KEYS_HELP
)]
pub struct Cli {
    /// Desktop pixels represented by one terminal column.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = 8)]
    pub cell_width: u32,

    /// Desktop pixels represented by one terminal row.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = 16)]
    pub cell_height: u32,

    /// Input poll interval.
    #[arg(long = "poll-ms", value_name = "MS", default_value_t = 16)]
    pub poll_ms: u64,

    /// Open this window at startup. May be repeated; the last one is active.
    #[arg(long = "open", value_name = "ID")]
    pub open: Vec<String>,

    /// Write logs to this file. Logging is discarded otherwise.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell dimensions must be between 1 and 256 pixels (got {width}x{height})")]
    CellSize { width: u32, height: u32 },
    #[error("poll interval must be between 1 and 1000 ms (got {0})")]
    PollInterval(u64),
}

/// Upper bound for either cell dimension.
pub const MAX_CELL_PX: u32 = 256;

/// Pixels per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

impl CellMetrics {
    pub fn viewport(&self, area: Rect) -> Viewport {
        Viewport::new(
            (area.width as u32).saturating_mul(self.width),
            (area.height as u32).saturating_mul(self.height),
        )
    }

    /// Pixel at the center of the cell `(col, row)`.
    pub fn cell_center(&self, col: u16, row: u16) -> Point {
        let center = |index: u16, unit: u32| {
            let px = index as i64 * unit as i64 + (unit / 2) as i64;
            px.min(i32::MAX as i64) as i32
        };
        Point::new(center(col, self.width), center(row, self.height))
    }

    /// Cell whose center lies inside `rect`, scanning from its top-left.
    pub fn first_cell_in(&self, rect: FloatRect) -> Option<(u16, u16)> {
        if rect.width == 0 || rect.height == 0 {
            return None;
        }
        let floor = |px: i64, unit: u32| (px.max(0) / unit as i64).min(u16::MAX as i64) as u16;
        let ceil = |px: i64, unit: u32| {
            ((px.max(0) + unit as i64 - 1) / unit as i64).min(u16::MAX as i64) as u16
        };
        let (x0, x1) = (floor(rect.x as i64, self.width), ceil(rect.right(), self.width));
        let (y0, y1) = (floor(rect.y as i64, self.height), ceil(rect.bottom(), self.height));
        for row in y0..y1 {
            for col in x0..x1 {
                if rect.contains(self.cell_center(col, row)) {
                    return Some((col, row));
                }
            }
        }
        None
    }

    /// Cells covered by `rect`, rounding edges to the nearest cell boundary.
    /// Parts left or above the origin are cut off.
    pub fn to_cells(&self, rect: FloatRect) -> Option<Rect> {
        let (x0, y0, x1, y1) = self.cell_span(rect)?;
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    fn cell_span(&self, rect: FloatRect) -> Option<(u16, u16, u16, u16)> {
        if rect.width == 0 || rect.height == 0 {
            return None;
        }
        let to_cell = |px: i64, unit: u32| -> u16 {
            let unit = unit as i64;
            ((px.max(0) + unit / 2) / unit).min(u16::MAX as i64) as u16
        };
        let x0 = to_cell(rect.x as i64, self.width);
        let y0 = to_cell(rect.y as i64, self.height);
        let x1 = to_cell(rect.right(), self.width);
        let y1 = to_cell(rect.bottom(), self.height);
        Some((x0, y0, x1, y1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub cell: CellMetrics,
    pub poll_interval: Duration,
    pub surface: SurfaceConfig,
    pub open_at_start: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            cell: CellMetrics::default(),
            poll_interval: Duration::from_millis(16),
            surface: SurfaceConfig::default(),
            open_at_start: Vec::new(),
            log_file: None,
        }
    }
}

impl TryFrom<&Cli> for ShellConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let cell_range = 1..=MAX_CELL_PX;
        if !cell_range.contains(&cli.cell_width) || !cell_range.contains(&cli.cell_height) {
            return Err(ConfigError::CellSize {
                width: cli.cell_width,
                height: cli.cell_height,
            });
        }
        if !(1..=1000).contains(&cli.poll_ms) {
            return Err(ConfigError::PollInterval(cli.poll_ms));
        }
        Ok(Self {
            cell: CellMetrics {
                width: cli.cell_width,
                height: cli.cell_height,
            },
            poll_interval: Duration::from_millis(cli.poll_ms),
            surface: SurfaceConfig::default(),
            open_at_start: cli.open.clone(),
            log_file: cli.log_file.clone(),
        })
    }
}
