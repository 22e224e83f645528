use chrono::NaiveDate;

use crate::config::{MARKET_ANCHOR_DATE, MARKET_ANCHOR_INDEX};

/// The four days of the Igbo market week (izu).
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MarketDay {
    Eke,
    Orie,
    Afo,
    Nkwo,
}

impl MarketDay {
    /// Cycle order.
    pub const ALL: [MarketDay; 4] = [
        MarketDay::Eke,
        MarketDay::Orie,
        MarketDay::Afo,
        MarketDay::Nkwo,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this day within `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Market day at `index`, wrapping around the cycle.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Maps calendar dates onto the 4-day market cycle.
///
/// The cycle is pinned by a single (date, market day) anchor. Every other date
/// is placed by counting whole calendar days from the anchor, so the result
/// depends only on the date components and never on wall-clock offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketDayCycle {
    anchor_date: NaiveDate,
    anchor_day: MarketDay,
}

impl MarketDayCycle {
    pub fn new(anchor_date: NaiveDate, anchor_day: MarketDay) -> Self {
        Self {
            anchor_date,
            anchor_day,
        }
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    pub fn anchor_day(&self) -> MarketDay {
        self.anchor_day
    }

    /// Signed whole days from the anchor to `date` (negative before the anchor).
    pub fn days_from_anchor(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.anchor_date).num_days()
    }

    pub fn resolve(&self, date: NaiveDate) -> MarketDay {
        let cycle_len = MarketDay::COUNT as i64;
        let offset = (self.anchor_day.index() as i64 + self.days_from_anchor(date))
            .rem_euclid(cycle_len);
        MarketDay::from_index(offset as usize)
    }
}

impl Default for MarketDayCycle {
    fn default() -> Self {
        Self::new(MARKET_ANCHOR_DATE, MarketDay::from_index(MARKET_ANCHOR_INDEX))
    }
}
