// User interface components
pub mod app;
mod app_navigation;
mod app_theme;
pub mod config;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod utils;

// Re-export main app
pub use app::{AppError, CalendarAction, CalendarApp};
pub use app_theme::{load_theme, persist_theme};
pub use config::{UI_CONFIG, UI_TEXT};
