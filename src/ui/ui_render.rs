use chrono::NaiveDate;
use eframe::egui::{
    CentralPanel, Context, CornerRadius, Frame, Grid, Key, Margin, RichText, ScrollArea, Stroke,
    TopBottomPanel, Ui, vec2,
};

use crate::models::{DayCell, DayInfo};
use crate::ui::app::CalendarAction;
use crate::ui::config::{UI_CONFIG, UI_TEXT, UiPalette};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{NavigationPanel, Panel};
use crate::ui::utils::{colored_heading, spaced_separator};
use crate::utils::{format_date, format_long_date};

use super::app::CalendarApp;

impl CalendarApp {
    pub(super) fn render_top_panel(&self, ctx: &Context) -> Vec<CalendarAction> {
        let title = self.display.label();
        let theme = self.theme;
        TopBottomPanel::top("navigation_panel")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let events = NavigationPanel::new(&title, theme).render(ui);
                ui.add_space(6.0);
                events
            })
            .inner
    }

    pub(super) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.last_error {
                    ui.label_error(err.to_string());
                    ui.separator();
                }
                ui.label_subdued(UI_TEXT.shortcuts_hint);
            });
        });
    }

    pub(super) fn render_central_panel(&self, ctx: &Context, today: NaiveDate) {
        let grid = self.month_grid(today);
        let palette = UI_CONFIG.palette(self.theme);

        CentralPanel::default()
            .frame(Frame::new().fill(palette.panel).inner_margin(Margin::same(12)))
            .show(ctx, |ui| {
                ScrollArea::both().show(ui, |ui| {
                    Grid::new("calendar_grid")
                        .num_columns(7)
                        .spacing(vec2(UI_CONFIG.cell_spacing, UI_CONFIG.cell_spacing))
                        .show(ui, |ui| {
                            for header in &grid.weekday_headers {
                                ui.label(colored_heading(header.as_str(), self.theme));
                            }
                            ui.end_row();

                            for week in grid.weeks() {
                                for cell in week {
                                    match cell {
                                        DayCell::Padding => {
                                            ui.allocate_space(vec2(
                                                UI_CONFIG.cell_width,
                                                UI_CONFIG.cell_height,
                                            ));
                                        }
                                        DayCell::Day(info) => render_day_cell(ui, info, palette),
                                    }
                                }
                                ui.end_row();
                            }
                        });

                    spaced_separator(ui);
                    render_month_holidays(ui, grid.days(), palette);
                });
            });
    }

    pub(super) fn handle_global_shortcuts(&self, ctx: &Context) -> Vec<CalendarAction> {
        ctx.input(|i| {
            let mut actions = Vec::new();
            if i.key_pressed(Key::ArrowLeft) {
                actions.push(CalendarAction::PreviousMonth);
            }
            if i.key_pressed(Key::ArrowRight) {
                actions.push(CalendarAction::NextMonth);
            }
            if i.key_pressed(Key::Home) {
                actions.push(CalendarAction::Today);
            }
            if i.key_pressed(Key::T) {
                actions.push(CalendarAction::ToggleTheme);
            }
            actions
        })
    }
}

fn render_day_cell(ui: &mut Ui, info: &DayInfo, palette: &UiPalette) {
    let fill = if info.holiday.is_some() {
        palette.holiday_fill
    } else {
        palette.day_fill
    };
    let stroke = if info.is_today {
        Stroke::new(UI_CONFIG.today_stroke_width, palette.today_stroke)
    } else {
        Stroke::NONE
    };

    let response = Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(4))
        .show(ui, |ui| {
            ui.set_min_size(vec2(UI_CONFIG.cell_width, UI_CONFIG.cell_height));
            ui.set_max_width(UI_CONFIG.cell_width);
            ui.vertical(|ui| {
                ui.label_day_number(info.day, palette);
                ui.label_market_day(info.market_day, palette);
                if let Some(holiday) = &info.holiday {
                    ui.label_holiday(holiday, palette);
                }
            });
        })
        .response;

    response.on_hover_text(day_tooltip(info));
}

/// Hover text: long date with ISO date, market day, then the holiday if any
fn day_tooltip(info: &DayInfo) -> String {
    let mut tooltip = format!(
        "{} ({})\n{}: {}",
        format_long_date(info.date),
        format_date(info.date),
        UI_TEXT.market_day_tooltip,
        info.market_day
    );
    if let Some(holiday) = &info.holiday {
        tooltip.push('\n');
        tooltip.push_str(&holiday.name);
    }
    tooltip
}

/// Compact list of the month's holidays under the grid
fn render_month_holidays<'a>(
    ui: &mut Ui,
    days: impl Iterator<Item = &'a DayInfo>,
    palette: &UiPalette,
) {
    for info in days {
        let Some(holiday) = &info.holiday else {
            continue;
        };
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{:>2}", info.day)).monospace());
            ui.label_holiday(holiday, palette);
            ui.label_subdued(info.market_day.name());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Holiday, HolidayKind, MarketDay};
    use crate::models::{DisplayMonth, Theme};
    use eframe::egui::RawInput;

    #[test]
    fn test_panels_render_from_shared_app() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        // Immutable binding: rendering only reads app state
        let app = CalendarApp::with_state(today, None, Theme::Dark);
        let ctx = Context::default();

        let mut actions = Vec::new();
        let _ = ctx.run(RawInput::default(), |ctx| {
            actions = app.render_top_panel(ctx);
            app.render_status_panel(ctx);
            app.render_central_panel(ctx, today);
        });

        assert!(actions.is_empty(), "no clicks, no actions: {actions:?}");
        assert_eq!(app.display_month(), DisplayMonth::new(2026, 10).unwrap());
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_day_tooltip() {
        let info = DayInfo {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            day: 1,
            market_day: MarketDay::Orie,
            holiday: Some(Holiday {
                name: "New Year".to_string(),
                kind: HolidayKind::Civic,
            }),
            is_today: false,
        };
        assert_eq!(
            day_tooltip(&info),
            "Thursday, 1 January 2026 (2026-01-01)\nMarket day: ORIE\nNew Year"
        );

        let plain = DayInfo {
            holiday: None,
            ..info
        };
        assert_eq!(
            day_tooltip(&plain),
            "Thursday, 1 January 2026 (2026-01-01)\nMarket day: ORIE"
        );
    }
}
