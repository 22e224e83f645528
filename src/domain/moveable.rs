use chrono::{Duration, NaiveDate};
use strum::IntoEnumIterator;

use super::easter::easter_sunday;

/// Feasts whose date is a fixed offset from Easter Sunday.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
pub enum MoveableHoliday {
    #[strum(serialize = "Ash Wednesday")]
    AshWednesday,
    #[strum(serialize = "Holy Thursday")]
    HolyThursday,
    #[strum(serialize = "Good Friday")]
    GoodFriday,
    #[strum(serialize = "Holy Saturday")]
    HolySaturday,
    #[strum(serialize = "Easter Sunday")]
    EasterSunday,
    #[strum(serialize = "Easter Monday")]
    EasterMonday,
}

impl MoveableHoliday {
    /// Days relative to Easter Sunday.
    pub fn offset_days(self) -> i64 {
        match self {
            MoveableHoliday::AshWednesday => -46,
            MoveableHoliday::HolyThursday => -3,
            MoveableHoliday::GoodFriday => -2,
            MoveableHoliday::HolySaturday => -1,
            MoveableHoliday::EasterSunday => 0,
            MoveableHoliday::EasterMonday => 1,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The Easter-relative feasts of a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveableHolidaySet {
    year: i32,
    dates: Vec<(MoveableHoliday, NaiveDate)>,
}

impl MoveableHolidaySet {
    /// Expand Easter Sunday of `year` into every moveable feast.
    /// `None` when Easter is undefined for `year` (pre-Gregorian).
    pub fn expand(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        let dates = MoveableHoliday::iter()
            .map(|holiday| (holiday, easter + Duration::days(holiday.offset_days())))
            .collect();
        Some(Self { year, dates })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn get(&self, holiday: MoveableHoliday) -> Option<NaiveDate> {
        self.dates
            .iter()
            .find(|(h, _)| *h == holiday)
            .map(|(_, date)| *date)
    }

    /// Lookup by display name, e.g. "Good Friday".
    pub fn get_by_name(&self, name: &str) -> Option<NaiveDate> {
        let holiday: MoveableHoliday = name.parse().ok()?;
        self.get(holiday)
    }

    /// Feast falling exactly on `date` (year included).
    pub fn holiday_on(&self, date: NaiveDate) -> Option<MoveableHoliday> {
        self.dates
            .iter()
            .find(|(_, d)| *d == date)
            .map(|(holiday, _)| *holiday)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveableHoliday, NaiveDate)> + '_ {
        self.dates.iter().copied()
    }
}
