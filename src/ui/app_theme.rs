use crate::config::THEME_KEY;
use crate::models::Theme;

use super::app::CalendarApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Reads the theme preference. Missing storage, a missing key or an unknown
/// value all give the light theme.
pub fn load_theme(storage: Option<&dyn eframe::Storage>) -> Theme {
    let Some(storage) = storage else {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("No preference storage available. Using default theme.");
        }
        return Theme::default();
    };

    let stored = storage.get_string(THEME_KEY);
    let theme = Theme::from_stored(stored.as_deref());

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_state_serde {
        log::info!("Loaded theme preference {:?} -> {}", stored, theme);
    }
    theme
}

pub fn persist_theme<S>(storage: &mut S, theme: Theme)
where
    S: eframe::Storage + ?Sized,
{
    storage.set_string(THEME_KEY, theme.as_str().to_string());

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_state_serde {
        log::info!("Stored theme preference: {}", theme);
    }
}

impl CalendarApp {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[theme] Switched to {}", self.theme);
        }
    }
}
