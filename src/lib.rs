// Core modules
pub mod config;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{
    CalendarError, Holiday, HolidayKind, HolidayResolver, MarketDay, MarketDayCycle,
    MoveableHoliday, MoveableHolidaySet, easter_sunday,
};
pub use models::{DisplayMonth, MonthGrid, Theme};
pub use ui::CalendarApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open the calendar on this month (YYYY-MM, two-digit month) instead of the current one
    #[arg(long)]
    pub start_month: Option<DisplayMonth>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    start_month: Option<DisplayMonth>,
) -> Box<dyn eframe::App> {
    Box::new(ui::CalendarApp::new(cc, start_month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_start_month() {
        let cli = Cli::try_parse_from(["ahia-calendar", "--start-month", "2026-12"]).unwrap();
        assert_eq!(cli.start_month, DisplayMonth::new(2026, 12).ok());

        let cli = Cli::try_parse_from(["ahia-calendar"]).unwrap();
        assert_eq!(cli.start_month, None);

        assert!(Cli::try_parse_from(["ahia-calendar", "--start-month", "2026-13"]).is_err());
        assert!(Cli::try_parse_from(["ahia-calendar", "--start-month", "2026-3"]).is_err());
    }
}
