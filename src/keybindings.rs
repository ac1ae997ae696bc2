use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Open the n-th catalog entry (zero based).
    OpenApp(usize),
    CycleFocus,
    // Active window
    MinimizeActive,
    ToggleMaximizeActive,
    CloseActive,
    // Window menu commands
    MinimizeAll,
    BringAllToFront,
    CloseAll,
    TileSideBySide,
    Cascade,
    // Window menu navigation
    ToggleWindowMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    /// Cancel the pointer interaction in flight, or close the menu.
    Cancel,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::OpenApp(n) => return write!(f, "Open application {}", n + 1),
            Action::CycleFocus => "Focus next window",
            Action::MinimizeActive => "Minimize active window",
            Action::ToggleMaximizeActive => "Zoom active window",
            Action::CloseActive => "Close active window",
            Action::MinimizeAll => "Minimize All",
            Action::BringAllToFront => "Bring All to Front",
            Action::CloseAll => "Close All",
            Action::TileSideBySide => "Tile Side by Side",
            Action::Cascade => "Cascade Windows",
            Action::ToggleWindowMenu => "Window menu",
            Action::MenuUp => "Menu up",
            Action::MenuDown => "Menu down",
            Action::MenuSelect => "Menu select",
            Action::Cancel => "Cancel",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Character keys ignore Shift since the case is already in the char.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match key.code {
            KeyCode::Char(_) => {
                key.modifiers.difference(KeyModifiers::SHIFT)
                    == self.mods.difference(KeyModifiers::SHIFT)
            }
            _ => key.modifiers == self.mods,
        }
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shell bindings. `apps` is the number of catalog entries reachable by
    /// digit keys (at most nine).
    pub fn shell(apps: usize) -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::plain(KeyCode::Char('q')));
        kb.add(Quit, KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for n in 0..apps.min(9) {
            let digit = char::from_digit(n as u32 + 1, 10).unwrap_or('1');
            kb.add(OpenApp(n), KeyCombo::plain(KeyCode::Char(digit)));
        }
        kb.add(CycleFocus, KeyCombo::plain(KeyCode::Tab));
        kb.add(MinimizeActive, KeyCombo::plain(KeyCode::Char('m')));
        kb.add(ToggleMaximizeActive, KeyCombo::plain(KeyCode::Char('z')));
        kb.add(CloseActive, KeyCombo::plain(KeyCode::Char('w')));
        kb.add(MinimizeAll, KeyCombo::plain(KeyCode::Char('M')));
        kb.add(BringAllToFront, KeyCombo::plain(KeyCode::Char('F')));
        kb.add(CloseAll, KeyCombo::plain(KeyCode::Char('W')));
        kb.add(TileSideBySide, KeyCombo::plain(KeyCode::Char('t')));
        kb.add(Cascade, KeyCombo::plain(KeyCode::Char('c')));
        kb.add(ToggleWindowMenu, KeyCombo::plain(KeyCode::F(2)));
        kb.add(MenuUp, KeyCombo::plain(KeyCode::Up));
        kb.add(MenuDown, KeyCombo::plain(KeyCode::Down));
        kb.add(MenuSelect, KeyCombo::plain(KeyCode::Enter));
        kb.add(Cancel, KeyCombo::plain(KeyCode::Esc));
        kb
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.map
            .iter()
            .find(|(_, list)| list.iter().any(|c| c.matches(key)))
            .map(|(act, _)| *act)
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}
