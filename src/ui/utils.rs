use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::models::Theme;
use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with monospace font
pub fn colored_heading(text: impl Into<String>, theme: Theme) -> RichText {
    RichText::new(text.into())
        .color(UI_CONFIG.palette(theme).heading)
        .monospace()
}

/// Sets up visuals for the whole application from the active theme
pub fn setup_custom_visuals(ctx: &Context, theme: Theme) {
    let palette = UI_CONFIG.palette(theme);
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.widgets.hovered.fg_stroke.color = palette.heading;
    visuals.widgets.active.fg_stroke.color = palette.heading;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}
