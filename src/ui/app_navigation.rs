use chrono::NaiveDate;

use super::app::CalendarApp;
use crate::models::{DisplayMonth, MonthGrid};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl CalendarApp {
    pub fn show_previous_month(&mut self) {
        self.set_display(self.display.previous(), "previous month");
    }

    pub fn show_next_month(&mut self) {
        self.set_display(self.display.next(), "next month");
    }

    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.set_display(DisplayMonth::containing(date), "jump to date");
    }

    /// Grid for the displayed month, with `today` highlighted.
    pub fn month_grid(&self, today: NaiveDate) -> MonthGrid {
        MonthGrid::build(
            self.display,
            today,
            &self.market_days,
            &self.holidays,
            self.week_start,
        )
    }

    fn set_display(&mut self, display: DisplayMonth, _reason: &str) {
        if display == self.display {
            return;
        }
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[nav] {} -> {} ({})", self.display, display, _reason);
        }
        self.display = display;
    }
}
