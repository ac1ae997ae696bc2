use ratatui::style::Color;

// Centralized theme colors for the shell chrome.

pub const ACCENT_RGB: (u8, u8, u8) = (229, 9, 20);

pub fn accent() -> Color {
    let (r, g, b) = ACCENT_RGB;
    Color::Rgb(r, g, b)
}

// Menu bar
pub fn menu_bar_bg() -> Color {
    Color::Rgb(20, 20, 22)
}
pub fn menu_bar_fg() -> Color {
    Color::Gray
}
pub fn app_name_fg() -> Color {
    Color::White
}

// Dropdown menu
pub fn menu_bg() -> Color {
    Color::DarkGray
}
pub fn menu_fg() -> Color {
    Color::White
}
pub fn menu_selected_bg() -> Color {
    Color::Gray
}
pub fn menu_selected_fg() -> Color {
    Color::Black
}

// Dock
pub fn dock_bg() -> Color {
    Color::Rgb(30, 30, 34)
}
pub fn dock_fg() -> Color {
    Color::Gray
}
pub fn dock_indicator() -> Color {
    Color::White
}

// Desktop
pub fn desktop_bg() -> Color {
    Color::Rgb(10, 10, 14)
}
