use chrono::{Datelike, NaiveDate};

/// First year of the Gregorian calendar era.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Gregorian Easter Sunday for `year`.
///
/// Anonymous Gregorian computus in integer arithmetic. Returns `None` for years
/// before the Gregorian era and for years chrono cannot represent.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }
    // Also keeps the i32 arithmetic below from overflowing
    if year > NaiveDate::MAX.year() {
        return None;
    }

    // Golden number minus one
    let g = year % 19;
    let c = year / 100;
    // Days from the March 21 equinox to the Paschal full moon
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (29 / (h + 1)) * ((21 - g) / 11));
    // Weekday of the Paschal full moon
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let l = i - j;

    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
