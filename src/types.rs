use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, ERA_AD, ERA_BC, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTH_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroI32;
use std::num::NonZeroU8;

/// A nonzero signed year in the AD/BC numbering, in the range
/// `MIN_YEAR..=MAX_YEAR`. Positive values are AD, negative values are BC;
/// there is no year 0, so the year sequence runs ..., 2, 1, -1, -2, ...
/// Uses `NonZeroI32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(NonZeroI32);

impl Year {
    /// Creates a new Year, validating that it's non-zero and within
    /// `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or outside the
    /// supported range.
    pub fn new(value: i32) -> Result<Self, DateError> {
        let non_zero = NonZeroI32::new(value).ok_or(DateError::InvalidYear { year: value })?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear { year: value });
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as i32 (raw signed value, negative for BC)
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get()
    }

    /// Era tag derived from the sign of the year
    pub const fn era(self) -> Era {
        if self.0.get() > 0 { Era::Ad } else { Era::Bc }
    }

    /// Whether this year has a February 29
    pub const fn leap(self) -> bool {
        is_leap_year(self.0.get())
    }

    /// The following year, stepping from 1 BC directly to AD 1.
    /// Callers guard the `MAX_YEAR` edge, so the arithmetic cannot overflow
    pub(crate) fn succ(self) -> Self {
        Self::step(self.0.get(), 1)
    }

    /// The preceding year, stepping from AD 1 directly to 1 BC.
    /// Callers guard the `MIN_YEAR` edge, so the arithmetic cannot overflow
    pub(crate) fn pred(self) -> Self {
        Self::step(self.0.get(), -1)
    }

    fn step(year: i32, by: i32) -> Self {
        let mut next = year + by;
        if next == 0 {
            // -1 and 1 are adjacent: there is no year 0
            next = by;
        }
        Self(NonZeroI32::new(next).expect("zero result replaced above"))
    }
}

impl TryFrom<i32> for Year {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Era tag: AD for positive years, BC for negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Ad,
    Bc,
}

impl Era {
    /// The fixed English label for this era
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ad => ERA_AD,
            Self::Bc => ERA_BC,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth { month: value })?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth { month: value });
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    /// The following month, wrapping December to January
    pub(crate) fn succ(self) -> Self {
        let next = if self.0.get() == DECEMBER {
            JANUARY
        } else {
            self.0.get() + 1
        };
        Self(NonZeroU8::new(next).expect("months stay in 1..=12"))
    }

    /// The preceding month, wrapping January to December
    pub(crate) fn pred(self) -> Self {
        let prev = if self.0.get() == JANUARY {
            DECEMBER
        } else {
            self.0.get() - 1
        };
        Self(NonZeroU8::new(prev).expect("months stay in 1..=12"))
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year,
            month,
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(DateError::InvalidDay {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Day 1, for month rollover
    pub(crate) const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    /// Last day of the given month
    pub(crate) fn last_of(year: i32, month: u8) -> Self {
        Self(NonZeroU8::new(days_in_month(year, month)).expect("every month has at least 28 days"))
    }

    /// The following day; caller keeps the result within the month
    pub(crate) fn succ(self) -> Self {
        Self(self.0.checked_add(1).expect("days stay below u8::MAX"))
    }

    /// The preceding day; caller only steps down from day 2 or later
    pub(crate) fn pred(self) -> Self {
        Self(NonZeroU8::new(self.0.get() - 1).expect("caller keeps day above 1"))
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month length without year/month context,
        // so only the universal 1..=31 range is checked here
        if !(MIN_DAY..=DAYS_IN_MONTH[JANUARY as usize]).contains(&value) {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Leap-year rule on the raw signed year: divisible by 4, and not divisible
/// by 100 unless divisible by 400. Truncating `%` keeps negative (BC) years
/// on the same divisibility arithmetic as positive ones.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in the given month of the given year.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
