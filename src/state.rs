/// Transient UI state of the shell chrome. Window state lives in the
/// registry; this only tracks the menu bar's dropdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellState {
    window_menu_open: bool,
    window_menu_selected: usize,
    quit_requested: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_menu_open(&self) -> bool {
        self.window_menu_open
    }

    pub fn open_window_menu(&mut self) {
        self.window_menu_open = true;
        self.window_menu_selected = 0;
    }

    pub fn close_window_menu(&mut self) {
        self.window_menu_open = false;
    }

    pub fn toggle_window_menu(&mut self) {
        if self.window_menu_open {
            self.close_window_menu();
        } else {
            self.open_window_menu();
        }
    }

    pub fn window_menu_selected(&self) -> usize {
        self.window_menu_selected
    }

    /// Move the highlighted menu row by `delta`, wrapping within `len` rows.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.window_menu_selected = 0;
            return;
        }
        let next = (self.window_menu_selected as isize + delta).rem_euclid(len as isize);
        self.window_menu_selected = next as usize;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_resets_selection() {
        let mut s = ShellState::new();
        s.open_window_menu();
        s.move_selection(2, 5);
        assert_eq!(s.window_menu_selected(), 2);
        s.toggle_window_menu();
        assert!(!s.window_menu_open());
        s.toggle_window_menu();
        assert!(s.window_menu_open());
        assert_eq!(s.window_menu_selected(), 0);
    }

    #[test]
    fn selection_wraps() {
        let mut s = ShellState::new();
        s.move_selection(-1, 5);
        assert_eq!(s.window_menu_selected(), 4);
        s.move_selection(1, 5);
        assert_eq!(s.window_menu_selected(), 0);
        s.move_selection(3, 0);
        assert_eq!(s.window_menu_selected(), 0);
    }
}
