use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use super::error::CalendarError;
use super::fixed_dates::FixedDateTable;
use super::moveable::MoveableHolidaySet;
use crate::config::{CIVIC_HOLIDAYS, IGBO_FESTIVALS};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Which table produced a holiday label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    Civic,
    Festival,
    Moveable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub kind: HolidayKind,
}

/// Labels dates with civic holidays, cultural festivals and Easter-relative feasts.
///
/// Lookup order is civic, then festival, then moveable; the first hit wins. A
/// fixed entry therefore shadows a moveable feast that lands on the same day.
/// Moveable sets are memoised per year.
#[derive(Debug)]
pub struct HolidayResolver {
    civic: FixedDateTable,
    festivals: FixedDateTable,
    moveable_cache: RefCell<HashMap<i32, Option<MoveableHolidaySet>>>,
}

impl HolidayResolver {
    pub fn with_tables(civic: FixedDateTable, festivals: FixedDateTable) -> Self {
        Self {
            civic,
            festivals,
            moveable_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolver over the built-in civic holiday and Igbo festival tables.
    pub fn igbo() -> Result<Self, CalendarError> {
        Ok(Self::with_tables(
            FixedDateTable::from_entries(CIVIC_HOLIDAYS)?,
            FixedDateTable::from_entries(IGBO_FESTIVALS)?,
        ))
    }

    pub fn resolve(&self, date: NaiveDate) -> Option<Holiday> {
        if let Some(name) = self.civic.lookup(date) {
            return Some(Holiday {
                name: name.to_string(),
                kind: HolidayKind::Civic,
            });
        }
        if let Some(name) = self.festivals.lookup(date) {
            return Some(Holiday {
                name: name.to_string(),
                kind: HolidayKind::Festival,
            });
        }
        self.moveable_holiday_on(date).map(|name| Holiday {
            name: name.to_string(),
            kind: HolidayKind::Moveable,
        })
    }

    pub fn resolve_name(&self, date: NaiveDate) -> Option<String> {
        self.resolve(date).map(|holiday| holiday.name)
    }

    fn moveable_holiday_on(&self, date: NaiveDate) -> Option<&'static str> {
        let year = date.year();
        let mut cache = self.moveable_cache.borrow_mut();
        let set = cache.entry(year).or_insert_with(|| {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_moveable_expansion {
                log::info!("[holidays] Expanding moveable feasts for {year}");
            }
            MoveableHolidaySet::expand(year)
        });
        set.as_ref()?.holiday_on(date).map(|holiday| holiday.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixed_dates::MonthDay;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_year_2026() {
        let resolver = HolidayResolver::igbo().unwrap();
        let holiday = resolver.resolve(ymd(2026, 1, 1)).unwrap();
        assert_eq!(holiday.name, "New Year");
        assert_eq!(holiday.kind, HolidayKind::Civic);
    }

    #[test]
    fn test_boxing_day_any_year() {
        let resolver = HolidayResolver::igbo().unwrap();
        for year in [1700, 1985, 2026, 2099, 3000] {
            assert_eq!(
                resolver.resolve_name(ymd(year, 12, 26)).as_deref(),
                Some("Boxing Day"),
                "Boxing Day {year}"
            );
        }
    }

    #[test]
    fn test_festival_lookup() {
        let resolver = HolidayResolver::igbo().unwrap();
        let holiday = resolver.resolve(ymd(2026, 7, 15)).unwrap();
        assert_eq!(holiday.name, "New Yam Festival (Iri Ji)");
        assert_eq!(holiday.kind, HolidayKind::Festival);
        assert_eq!(
            resolver.resolve_name(ymd(2031, 11, 30)).as_deref(),
            Some("Ahiajoku Festival")
        );
    }

    #[test]
    fn test_moveable_feasts_2026() {
        let resolver = HolidayResolver::igbo().unwrap();
        assert_eq!(
            resolver.resolve_name(ymd(2026, 4, 5)).as_deref(),
            Some("Easter Sunday")
        );
        let good_friday = resolver.resolve(ymd(2026, 4, 3)).unwrap();
        assert_eq!(good_friday.name, "Good Friday");
        assert_eq!(good_friday.kind, HolidayKind::Moveable);
        assert_eq!(
            resolver.resolve_name(ymd(2026, 2, 18)).as_deref(),
            Some("Ash Wednesday")
        );
        // Same month/day, different year: no match
        assert_eq!(resolver.resolve(ymd(2027, 4, 5)), None);
    }

    #[test]
    fn test_plain_day_has_no_holiday() {
        let resolver = HolidayResolver::igbo().unwrap();
        assert_eq!(resolver.resolve(ymd(2026, 10, 16)), None);
        assert_eq!(resolver.resolve(ymd(1500, 4, 3)), None);
    }

    #[test]
    fn test_fixed_entry_shadows_moveable() {
        // Easter 2026 is April 5
        let mut civic = FixedDateTable::new();
        civic
            .insert(MonthDay::new(4, 5).unwrap(), "Founders Day")
            .unwrap();
        let resolver = HolidayResolver::with_tables(civic, FixedDateTable::new());

        let holiday = resolver.resolve(ymd(2026, 4, 5)).unwrap();
        assert_eq!(holiday.name, "Founders Day");
        assert_eq!(holiday.kind, HolidayKind::Civic);
        // Neighbouring feast still resolves
        assert_eq!(
            resolver.resolve_name(ymd(2026, 4, 6)).as_deref(),
            Some("Easter Monday")
        );
    }

    #[test]
    fn test_civic_shadows_festival() {
        let civic = FixedDateTable::from_entries(&[(8, 20, "Civic")]).unwrap();
        let festivals = FixedDateTable::from_entries(&[(8, 20, "Festival")]).unwrap();
        let resolver = HolidayResolver::with_tables(civic, festivals);
        assert_eq!(
            resolver.resolve_name(ymd(2026, 8, 20)).as_deref(),
            Some("Civic")
        );
    }

    #[test]
    fn test_cache_is_consistent_across_years() {
        let resolver = HolidayResolver::igbo().unwrap();
        for _ in 0..2 {
            assert_eq!(
                resolver.resolve_name(ymd(2025, 4, 18)).as_deref(),
                Some("Good Friday")
            );
            assert_eq!(
                resolver.resolve_name(ymd(2024, 3, 29)).as_deref(),
                Some("Good Friday")
            );
        }
    }
}
