//! Configuration module for the calendar application.

pub mod calendar;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use calendar::{
    CIVIC_HOLIDAYS, IGBO_FESTIVALS, MARKET_ANCHOR_DATE, MARKET_ANCHOR_INDEX, WEEK_STARTS_ON,
};
pub use persistence::{APP_STATE_PATH, THEME_KEY};
