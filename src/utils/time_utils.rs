use chrono::{Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const LONG_DATE_FORMAT: &str = "%A, %-d %B %Y";
}

/// Today's date on the local wall clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_DATE_FORMAT).to_string()
}

/// Used for tooltips, e.g. "Friday, 16 October 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(TimeUtils::LONG_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(format_date(date), "2026-10-06");
        assert_eq!(format_long_date(date), "Tuesday, 6 October 2026");
    }
}
