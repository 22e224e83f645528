// Date-labelling rules: pure, independent of rendering
pub mod easter;
pub mod error;
pub mod fixed_dates;
pub mod holiday;
pub mod market_day;
pub mod moveable;

// Re-export commonly used types
pub use easter::easter_sunday;
pub use error::CalendarError;
pub use fixed_dates::{FixedDateTable, MonthDay};
pub use holiday::{Holiday, HolidayKind, HolidayResolver};
pub use market_day::{MarketDay, MarketDayCycle};
pub use moveable::{MoveableHoliday, MoveableHolidaySet};
