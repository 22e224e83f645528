//! Calendar reference data: the market-day anchor and grid layout.

use chrono::{NaiveDate, Weekday};

/// Reference date for the market-day cycle.
/// Jan 1, 2026 is an ORIE day.
pub const MARKET_ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => panic!("market anchor date must be a valid calendar date"),
};

/// Index of the anchor date's market day within `EKE, ORIE, AFO, NKWO`.
pub const MARKET_ANCHOR_INDEX: usize = 1;

/// First column of the month grid.
pub const WEEK_STARTS_ON: Weekday = Weekday::Sun;

/// Civic holidays keyed by (month, day).
pub const CIVIC_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "New Year"),
    (2, 14, "Valentine's Day"),
    (5, 1, "Workers Day"),
    (6, 12, "Democracy Day"),
    (10, 1, "Independence Day"),
    (12, 25, "Christmas"),
    (12, 26, "Boxing Day"),
];

/// Igbo cultural festivals keyed by (month, day).
pub const IGBO_FESTIVALS: &[(u32, u32, &str)] = &[
    (7, 15, "New Yam Festival (Iri Ji)"),
    (8, 20, "Ofala Festival"),
    (11, 30, "Ahiajoku Festival"),
];
