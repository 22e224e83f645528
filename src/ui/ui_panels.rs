use eframe::egui::{Align, Layout, RichText, Ui};

use crate::models::Theme;
use crate::ui::app::CalendarAction;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Month title with navigation and theme buttons
pub struct NavigationPanel<'a> {
    title: &'a str,
    theme: Theme,
}

impl<'a> NavigationPanel<'a> {
    pub fn new(title: &'a str, theme: Theme) -> Self {
        Self { title, theme }
    }
}

impl Panel for NavigationPanel<'_> {
    type Event = CalendarAction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            if ui.button(UI_TEXT.previous_month).clicked() {
                events.push(CalendarAction::PreviousMonth);
            }
            ui.label(
                RichText::new(self.title)
                    .heading()
                    .color(UI_CONFIG.palette(self.theme).heading),
            );
            if ui.button(UI_TEXT.next_month).clicked() {
                events.push(CalendarAction::NextMonth);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(UI_TEXT.theme_button(self.theme)).clicked() {
                    events.push(CalendarAction::ToggleTheme);
                }
                if ui.button(UI_TEXT.today_button).clicked() {
                    events.push(CalendarAction::Today);
                }
            });
        });

        events
    }
}
