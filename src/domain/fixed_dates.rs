use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use super::error::CalendarError;

/// Year-less calendar key for recurring dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Validates against the longest version of each month, so Feb 29 is allowed.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        // 2000 is a leap year
        if day == 0 || NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(CalendarError::InvalidMonthDay { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Names attached to the same (month, day) every year.
#[derive(Debug, Clone, Default)]
pub struct FixedDateTable {
    entries: HashMap<MonthDay, String>,
}

impl FixedDateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(month, day, name)` rows. Rejects invalid or repeated keys.
    pub fn from_entries(rows: &[(u32, u32, &str)]) -> Result<Self, CalendarError> {
        let mut table = Self::new();
        for &(month, day, name) in rows {
            table.insert(MonthDay::new(month, day)?, name)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, key: MonthDay, name: impl Into<String>) -> Result<(), CalendarError> {
        if let Some(existing) = self.entries.get(&key) {
            return Err(CalendarError::DuplicateEntry {
                month: key.month,
                day: key.day,
                existing: existing.clone(),
            });
        }
        self.entries.insert(key, name.into());
        Ok(())
    }

    pub fn get(&self, key: MonthDay) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Entry for `date`, ignoring its year.
    pub fn lookup(&self, date: NaiveDate) -> Option<&str> {
        self.get(MonthDay::of(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_day_validation() {
        assert!(MonthDay::new(2, 29).is_ok());
        assert_eq!(MonthDay::new(13, 1), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(
            MonthDay::new(4, 31),
            Err(CalendarError::InvalidMonthDay { month: 4, day: 31 })
        );
        assert!(MonthDay::new(1, 0).is_err());
        assert_eq!(MonthDay::new(7, 4).unwrap().to_string(), "07-04");
    }

    #[test]
    fn test_lookup_ignores_year() {
        let table = FixedDateTable::from_entries(&[(12, 26, "Boxing Day")]).unwrap();
        for year in [1600, 1999, 2026, 2400] {
            assert_eq!(table.lookup(ymd(year, 12, 26)), Some("Boxing Day"), "{year}");
        }
        assert_eq!(table.lookup(ymd(2026, 12, 27)), None);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = FixedDateTable::from_entries(&[(1, 1, "New Year"), (1, 1, "Other")]);
        match result {
            Err(CalendarError::DuplicateEntry { month, day, existing }) => {
                assert_eq!((month, day), (1, 1));
                assert_eq!(existing, "New Year");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_table() {
        let table = FixedDateTable::new();
        assert_eq!(table.lookup(ymd(2026, 1, 1)), None);
        assert_eq!(table.get(MonthDay::new(12, 25).unwrap()), None);
    }
}
