//! Window registry: the single source of truth for every application window.
//!
//! Entries are created once from the application catalog and are never
//! removed; they are only toggled through five operations ([`open`],
//! [`close`], [`minimize`], [`toggle_maximize`], [`focus`]) and the bulk
//! actions built on them. Every operation accepts ids that are not
//! registered and ignores them, since dock and menu callers may hold stale
//! ids.
//!
//! [`open`]: WindowRegistry::open
//! [`close`]: WindowRegistry::close
//! [`minimize`]: WindowRegistry::minimize
//! [`toggle_maximize`]: WindowRegistry::toggle_maximize
//! [`focus`]: WindowRegistry::focus

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::catalog::{AppSpec, portfolio_catalog};
use crate::constants::{BASE_Z_INDEX, INITIAL_TOP_Z};
use crate::layout::centered_with_jitter;
use crate::viewport::{Viewport, ViewportProvider};
use crate::window::{Point, Size};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("window id must not be empty")]
    EmptyId,
    #[error("window id `{0}` is registered twice")]
    DuplicateId(String),
    #[error("window `{0}` has an empty default size")]
    EmptySize(String),
}

/// One window's state record. Read-only outside the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    id: WindowId,
    title: String,
    app_name: String,
    dock_label: String,
    open: bool,
    minimized: bool,
    maximized: bool,
    z_index: u64,
    geometry_epoch: u64,
    default_position: Point,
    default_size: Size,
}

impl WindowEntry {
    fn from_spec(spec: &AppSpec, viewport: Viewport) -> Self {
        Self {
            id: WindowId::new(spec.id.clone()),
            title: spec.title.clone(),
            app_name: spec.app_name.clone(),
            dock_label: spec.dock_label.clone(),
            open: false,
            minimized: false,
            maximized: false,
            z_index: BASE_Z_INDEX as u64,
            geometry_epoch: 0,
            default_position: centered_with_jitter(spec.size, viewport, spec.jitter),
            default_size: spec.size,
        }
    }

    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn dock_label(&self) -> &str {
        &self.dock_label
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    /// Bumped whenever the entry stops rendering free-form (close, minimize,
    /// maximize toggle). Geometry recorded under an older epoch is stale.
    pub fn geometry_epoch(&self) -> u64 {
        self.geometry_epoch
    }

    pub fn default_position(&self) -> Point {
        self.default_position
    }

    pub fn default_size(&self) -> Size {
        self.default_size
    }

    /// Open and not minimized: the entry renders and takes input.
    pub fn is_visible(&self) -> bool {
        self.open && !self.minimized
    }
}

/// The open, non-minimized entry with the highest z-index.
///
/// z-indices of visible entries are unique because every open passes through
/// a focus; should two ever compare equal, the later-registered entry wins.
pub fn active_window(entries: &[WindowEntry]) -> Option<&WindowEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_visible())
        .max_by_key(|entry| entry.z_index)
}

#[derive(Debug, Clone)]
pub struct WindowRegistry {
    entries: Vec<WindowEntry>,
    index: BTreeMap<WindowId, usize>,
    top_z: u64,
}

impl WindowRegistry {
    /// Build a registry from `catalog`, centering each window in `viewport`.
    pub fn from_catalog(catalog: &[AppSpec], viewport: Viewport) -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(catalog.len());
        let mut index = BTreeMap::new();
        for spec in catalog {
            if spec.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if spec.size.is_empty() {
                return Err(CatalogError::EmptySize(spec.id.clone()));
            }
            let id = WindowId::new(spec.id.clone());
            if index.insert(id, entries.len()).is_some() {
                return Err(CatalogError::DuplicateId(spec.id.clone()));
            }
            entries.push(WindowEntry::from_spec(spec, viewport));
        }
        tracing::debug!(windows = entries.len(), ?viewport, "window registry built");
        Ok(Self {
            entries,
            index,
            top_z: INITIAL_TOP_Z as u64,
        })
    }

    /// Build a registry reading the viewport from `provider`, falling back to
    /// the default dimensions when it has no reading.
    pub fn with_provider<P: ViewportProvider + ?Sized>(
        catalog: &[AppSpec],
        provider: &P,
    ) -> Result<Self, CatalogError> {
        Self::from_catalog(catalog, Viewport::read_or_fallback(provider))
    }

    /// Registry over the portfolio applications.
    pub fn portfolio(viewport: Viewport) -> Result<Self, CatalogError> {
        Self::from_catalog(&portfolio_catalog(), viewport)
    }

    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&WindowEntry> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn top_z(&self) -> u64 {
        self.top_z
    }

    pub fn active_window(&self) -> Option<&WindowEntry> {
        active_window(&self.entries)
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active_window().map(WindowEntry::id)
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut WindowEntry> {
        match self.index.get(id) {
            Some(&idx) => self.entries.get_mut(idx),
            None => {
                tracing::trace!(window_id = id, "ignoring unknown window id");
                None
            }
        }
    }

    /// Show the window and make it the active one.
    pub fn open(&mut self, id: &str) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        entry.open = true;
        entry.minimized = false;
        tracing::debug!(window_id = id, "opened window");
        self.focus(id);
    }

    /// Hide the window and clear its minimized and maximized flags so the
    /// next open starts from a clean state.
    pub fn close(&mut self, id: &str) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if entry.open || entry.minimized || entry.maximized {
            entry.geometry_epoch += 1;
        }
        entry.open = false;
        entry.minimized = false;
        entry.maximized = false;
        tracing::debug!(window_id = id, "closed window");
    }

    /// Stop rendering the window. It stays open for the dock's purposes and
    /// keeps its z-index and maximized flag.
    pub fn minimize(&mut self, id: &str) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.minimized {
            entry.geometry_epoch += 1;
        }
        entry.minimized = true;
        tracing::debug!(window_id = id, "minimized window");
    }

    /// Flip the maximized flag. Default geometry is untouched; the surface
    /// derives maximized bounds from the flag and the current viewport, and
    /// the epoch bump retires any dragged geometry in both directions.
    pub fn toggle_maximize(&mut self, id: &str) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        entry.maximized = !entry.maximized;
        entry.geometry_epoch += 1;
        tracing::debug!(window_id = id, maximized = entry.maximized, "toggled maximize");
    }

    /// Raise the window above every other by assigning it the next value of
    /// the shared counter.
    pub fn focus(&mut self, id: &str) {
        let Some(&idx) = self.index.get(id) else {
            tracing::trace!(window_id = id, "ignoring focus for unknown window id");
            return;
        };
        self.top_z += 1;
        let z = self.top_z;
        self.entries[idx].z_index = z;
        tracing::debug!(window_id = id, z, "focused window");
    }

    fn ids_where(&self, pred: impl Fn(&WindowEntry) -> bool) -> Vec<WindowId> {
        self.entries
            .iter()
            .filter(|entry| pred(entry))
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Minimize every visible window.
    pub fn minimize_all(&mut self) {
        for id in self.ids_where(WindowEntry::is_visible) {
            self.minimize(id.as_str());
        }
    }

    /// Close every open window, minimized or not.
    pub fn close_all(&mut self) {
        for id in self.ids_where(WindowEntry::is_open) {
            self.close(id.as_str());
        }
    }

    /// Focus every visible window.
    ///
    /// Windows are focused in ascending z order, so their stacking relative
    /// to each other is preserved and the active window stays active, while
    /// all of them end up above every window not included.
    pub fn bring_all_to_front(&mut self) {
        let mut visible: Vec<(u64, WindowId)> = self
            .entries
            .iter()
            .filter(|entry| entry.is_visible())
            .map(|entry| (entry.z_index, entry.id.clone()))
            .collect();
        visible.sort();
        for (_, id) in visible {
            self.focus(id.as_str());
        }
    }

    /// Open each id in order; the last one ends up active.
    pub fn open_many<S: AsRef<str>>(&mut self, ids: &[S]) {
        for id in ids {
            self.open(id.as_ref());
        }
    }
}
