use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::{Holiday, HolidayResolver, MarketDay, MarketDayCycle};
use crate::models::display_month::DisplayMonth;

/// One populated calendar cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub day: u32,
    pub market_day: MarketDay,
    pub holiday: Option<Holiday>,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Blank slot before the 1st of the month
    Padding,
    Day(DayInfo),
}

/// Everything the painter needs to draw one month.
/// Built fresh for each frame from the current `DisplayMonth`.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub display: DisplayMonth,
    pub title: String,
    pub weekday_headers: Vec<String>,
    pub cells: Vec<DayCell>,
}

/// Column of `day` in a week that begins on `week_start` (0-based).
pub fn weekday_column(day: Weekday, week_start: Weekday) -> usize {
    let day = day.num_days_from_monday() as usize;
    let start = week_start.num_days_from_monday() as usize;
    (day + 7 - start) % 7
}

/// Short weekday names starting from `week_start`.
pub fn weekday_headers(week_start: Weekday) -> Vec<String> {
    std::iter::successors(Some(week_start), |day| Some(day.succ()))
        .take(7)
        .map(|day| day.to_string())
        .collect()
}

impl MonthGrid {
    pub fn build(
        display: DisplayMonth,
        today: NaiveDate,
        market_days: &MarketDayCycle,
        holidays: &HolidayResolver,
        week_start: Weekday,
    ) -> Self {
        let padding = weekday_column(display.first_day().weekday(), week_start);

        let mut cells = Vec::with_capacity(padding + 31);
        cells.extend(std::iter::repeat_n(DayCell::Padding, padding));
        cells.extend(display.days().map(|date| {
            DayCell::Day(DayInfo {
                date,
                day: date.day(),
                market_day: market_days.resolve(date),
                holiday: holidays.resolve(date),
                is_today: date == today,
            })
        }));

        Self {
            display,
            title: display.label(),
            weekday_headers: weekday_headers(week_start),
            cells,
        }
    }

    pub fn leading_padding(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, DayCell::Padding))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayInfo> {
        self.cells.iter().filter_map(|cell| match cell {
            DayCell::Day(info) => Some(info),
            DayCell::Padding => None,
        })
    }

    /// Rows of seven cells; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn build(year: i32, month: u32, today: NaiveDate) -> MonthGrid {
        MonthGrid::build(
            DisplayMonth::new(year, month).unwrap(),
            today,
            &MarketDayCycle::default(),
            &HolidayResolver::igbo().unwrap(),
            Weekday::Sun,
        )
    }

    #[test]
    fn test_weekday_column() {
        assert_eq!(weekday_column(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(weekday_column(Weekday::Thu, Weekday::Sun), 4);
        assert_eq!(weekday_column(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(weekday_column(Weekday::Mon, Weekday::Mon), 0);
    }

    #[test]
    fn test_headers_start_on_week_start() {
        assert_eq!(weekday_headers(Weekday::Sun)[0], "Sun");
        assert_eq!(weekday_headers(Weekday::Sun)[6], "Sat");
        assert_eq!(weekday_headers(Weekday::Mon)[0], "Mon");
    }

    #[test]
    fn test_october_2026_layout() {
        let grid = build(2026, 10, ymd(2026, 10, 16));
        assert_eq!(grid.title, "October 2026");
        // Oct 1 2026 is a Thursday
        assert_eq!(grid.leading_padding(), 4);
        assert_eq!(grid.days().count(), 31);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.weeks().count(), 5);

        let independence = grid.days().next().unwrap();
        assert_eq!(independence.day, 1);
        assert_eq!(
            independence.holiday.as_ref().map(|h| h.name.as_str()),
            Some("Independence Day")
        );
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(build(2024, 2, ymd(2024, 1, 1)).days().count(), 29);
        assert_eq!(build(2026, 2, ymd(2024, 1, 1)).days().count(), 28);
    }

    #[test]
    fn test_today_flag() {
        let grid = build(2026, 10, ymd(2026, 10, 16));
        let today: Vec<u32> = grid.days().filter(|d| d.is_today).map(|d| d.day).collect();
        assert_eq!(today, vec![16]);

        let other_month = build(2026, 11, ymd(2026, 10, 16));
        assert!(other_month.days().all(|d| !d.is_today));
    }

    #[test]
    fn test_january_2026_labels() {
        let grid = build(2026, 1, ymd(2026, 10, 16));
        let first = grid.days().next().unwrap();
        assert_eq!(first.market_day, MarketDay::Orie);
        assert_eq!(
            first.holiday.as_ref().map(|h| h.name.as_str()),
            Some("New Year")
        );
        let second = grid.days().nth(1).unwrap();
        assert_eq!(second.market_day, MarketDay::Afo);
        assert_eq!(second.holiday, None);
    }
}
