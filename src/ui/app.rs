use chrono::{NaiveDate, Weekday};
use eframe::{Frame, egui};
use std::fmt;

use crate::config::WEEK_STARTS_ON;
use crate::domain::{CalendarError, FixedDateTable, HolidayResolver, MarketDayCycle};
use crate::models::{DisplayMonth, Theme};
use crate::ui::app_theme::{load_theme, persist_theme};
use crate::ui::utils::setup_custom_visuals;
use crate::utils::local_today;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// Built-in holiday tables failed to load; the calendar runs without them
    HolidayTables(CalendarError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::HolidayTables(err) => write!(f, "Holiday tables unavailable: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

/// User-triggered actions, collected during rendering and applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    Today,
    ToggleTheme,
}

pub struct CalendarApp {
    pub(super) display: DisplayMonth,
    pub(super) theme: Theme,
    pub(super) market_days: MarketDayCycle,
    pub(super) holidays: HolidayResolver,
    pub(super) week_start: Weekday,
    pub(super) last_error: Option<AppError>,
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, start_month: Option<DisplayMonth>) -> Self {
        let theme = load_theme(cc.storage);
        let app = Self::with_state(local_today(), start_month, theme);
        setup_custom_visuals(&cc.egui_ctx, app.theme);
        app
    }

    /// Builds the app without an egui context. `start_month` defaults to the month of `today`.
    pub fn with_state(today: NaiveDate, start_month: Option<DisplayMonth>, theme: Theme) -> Self {
        let (holidays, last_error) = match HolidayResolver::igbo() {
            Ok(resolver) => (resolver, None),
            Err(err) => {
                log::error!("Failed to load holiday tables: {}", err);
                (
                    HolidayResolver::with_tables(FixedDateTable::new(), FixedDateTable::new()),
                    Some(AppError::HolidayTables(err)),
                )
            }
        };

        Self {
            display: start_month.unwrap_or_else(|| DisplayMonth::containing(today)),
            theme,
            market_days: MarketDayCycle::default(),
            holidays,
            week_start: WEEK_STARTS_ON,
            last_error,
        }
    }

    pub fn display_month(&self) -> DisplayMonth {
        self.display
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Applies one action. `storage` receives the theme on toggle when available.
    pub fn apply_action<S>(&mut self, action: CalendarAction, today: NaiveDate, storage: Option<&mut S>)
    where
        S: eframe::Storage + ?Sized,
    {
        match action {
            CalendarAction::PreviousMonth => self.show_previous_month(),
            CalendarAction::NextMonth => self.show_next_month(),
            CalendarAction::Today => self.show_month_of(today),
            CalendarAction::ToggleTheme => {
                self.toggle_theme();
                match storage {
                    Some(storage) => persist_theme(storage, self.theme),
                    None => log::warn!("No preference storage; theme change not persisted"),
                }
            }
        }
    }
}

impl eframe::App for CalendarApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        persist_theme(storage, self.theme);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        setup_custom_visuals(ctx, self.theme);

        // Re-read every frame so the highlight follows midnight
        let today = local_today();

        let mut actions = self.handle_global_shortcuts(ctx);
        actions.extend(self.render_top_panel(ctx));
        self.render_status_panel(ctx);
        self.render_central_panel(ctx, today);

        for action in actions {
            self.apply_action(action, today, frame.storage_mut());
        }
    }
}
