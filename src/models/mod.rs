// View models for the calendar.
// Pure data built from the domain rules, independent of egui.

pub mod display_month;
pub mod month_grid;
pub mod theme;

// Re-export key types for convenience
pub use display_month::DisplayMonth;
pub use month_grid::{DayCell, DayInfo, MonthGrid, weekday_column, weekday_headers};
pub use theme::Theme;
