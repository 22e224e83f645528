use eframe::egui::{RichText, Ui};

use crate::domain::{Holiday, HolidayKind, MarketDay};
use crate::ui::config::UiPalette;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for hints).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders the day-of-month number.
    fn label_day_number(&mut self, day: u32, palette: &UiPalette);

    /// Renders the market-day name in the market colour.
    fn label_market_day(&mut self, market_day: MarketDay, palette: &UiPalette);

    /// Renders a holiday name, coloured by where it came from.
    fn label_holiday(&mut self, holiday: &Holiday, palette: &UiPalette);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        let color = self.visuals().weak_text_color();
        self.label(RichText::new(text).small().color(color));
    }

    fn label_day_number(&mut self, day: u32, palette: &UiPalette) {
        self.label(RichText::new(day.to_string()).strong().color(palette.day_number));
    }

    fn label_market_day(&mut self, market_day: MarketDay, palette: &UiPalette) {
        self.label(
            RichText::new(market_day.name())
                .small()
                .monospace()
                .color(palette.market_day),
        );
    }

    fn label_holiday(&mut self, holiday: &Holiday, palette: &UiPalette) {
        let color = match holiday.kind {
            HolidayKind::Festival => palette.festival_text,
            HolidayKind::Civic | HolidayKind::Moveable => palette.holiday_text,
        };
        self.label(RichText::new(&holiday.name).small().color(color));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(eframe::egui::Color32::from_rgb(255, 100, 100)));
    }
}
