pub mod time_utils;

pub use time_utils::{TimeUtils, format_date, format_long_date, local_today};
