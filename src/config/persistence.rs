//! Preference persistence configuration

/// Path for saving/loading the native app's key-value store
pub const APP_STATE_PATH: &str = ".ahia_calendar_state.ron";

/// Storage key holding the theme preference ("dark" / "light")
pub const THEME_KEY: &str = "theme";
