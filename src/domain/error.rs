use std::fmt;

/// Errors raised by the fallible calendar constructors.
///
/// The resolvers themselves are total; only building keys, tables and
/// display months from raw numbers or text can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside 1..=12
    InvalidMonth(u32),
    /// Day that never occurs in the given month (Feb 29 is accepted)
    InvalidMonthDay { month: u32, day: u32 },
    /// Year/month not representable as a calendar date
    OutOfRange { year: i32, month: u32 },
    /// A fixed-date table already holds an entry for this key
    DuplicateEntry { month: u32, day: u32, existing: String },
    /// Text that does not parse as `YYYY-MM`
    Parse(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidMonth(month) => write!(f, "Invalid month: {}", month),
            CalendarError::InvalidMonthDay { month, day } => {
                write!(f, "Invalid day {} for month {}", day, month)
            }
            CalendarError::OutOfRange { year, month } => {
                write!(f, "Date out of range: {:04}-{:02}", year, month)
            }
            CalendarError::DuplicateEntry {
                month,
                day,
                existing,
            } => write!(
                f,
                "{:02}-{:02} already assigned to '{}'",
                month, day, existing
            ),
            CalendarError::Parse(text) => write!(f, "Expected YYYY-MM, got '{}'", text),
        }
    }
}

impl std::error::Error for CalendarError {}
