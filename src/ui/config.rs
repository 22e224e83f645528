use eframe::egui::Color32;

use crate::models::Theme;

/// Colours for one theme
#[derive(Clone, Copy)]
pub struct UiPalette {
    pub panel: Color32,
    pub heading: Color32,
    pub weekday_header: Color32,
    pub day_number: Color32,
    pub market_day: Color32,
    pub day_fill: Color32,
    pub holiday_fill: Color32,
    pub holiday_text: Color32,
    pub festival_text: Color32,
    pub today_stroke: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub light: UiPalette,
    pub dark: UiPalette,
    pub cell_width: f32,
    pub cell_height: f32,
    pub cell_spacing: f32,
    pub today_stroke_width: f32,
}

impl UiConfig {
    pub fn palette(&self, theme: Theme) -> &UiPalette {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    light: UiPalette {
        panel: Color32::from_rgb(245, 245, 240),
        heading: Color32::from_rgb(20, 90, 50),
        weekday_header: Color32::from_rgb(90, 90, 90),
        day_number: Color32::from_rgb(30, 30, 30),
        market_day: Color32::from_rgb(140, 80, 20),
        day_fill: Color32::WHITE,
        holiday_fill: Color32::from_rgb(255, 235, 225),
        holiday_text: Color32::from_rgb(190, 40, 40),
        festival_text: Color32::from_rgb(20, 110, 60),
        today_stroke: Color32::from_rgb(20, 120, 220),
    },
    dark: UiPalette {
        panel: Color32::from_rgb(25, 25, 25),
        heading: Color32::from_rgb(120, 210, 140),
        weekday_header: Color32::GRAY,
        day_number: Color32::from_rgb(230, 230, 230),
        market_day: Color32::from_rgb(240, 180, 90),
        day_fill: Color32::from_rgb(40, 40, 40),
        holiday_fill: Color32::from_rgb(80, 35, 35),
        holiday_text: Color32::from_rgb(255, 130, 120),
        festival_text: Color32::from_rgb(130, 220, 150),
        today_stroke: Color32::from_rgb(100, 170, 255),
    },
    cell_width: 86.0,
    cell_height: 64.0,
    cell_spacing: 4.0,
    today_stroke_width: 2.0,
};

/// User-facing strings
pub struct UiText {
    pub app_title: &'static str,
    pub previous_month: &'static str,
    pub next_month: &'static str,
    pub today_button: &'static str,
    pub dark_mode_button: &'static str,
    pub light_mode_button: &'static str,
    pub shortcuts_hint: &'static str,
    pub market_day_tooltip: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Ahia Calendar - Igbo market days & holidays",
    previous_month: "◀",
    next_month: "▶",
    today_button: "Today",
    dark_mode_button: "🌙 Dark Mode",
    light_mode_button: "☀️ Light Mode",
    shortcuts_hint: "← / → change month · Home jumps to today · T toggles theme",
    market_day_tooltip: "Market day",
};

impl UiText {
    /// Label for the theme button: offers the *other* theme.
    pub fn theme_button(&self, current: Theme) -> &'static str {
        if current.is_dark() {
            self.light_mode_button
        } else {
            self.dark_mode_button
        }
    }
}
