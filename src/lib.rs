pub mod actions;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod event_loop;
pub mod keybindings;
pub mod layout;
pub mod panel;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod viewport;
pub mod window;
