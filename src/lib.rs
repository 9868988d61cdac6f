mod consts;
mod prelude;
mod types;

pub use consts::*;
pub use types::{Day, Era, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A calendar date on the proleptic Gregorian calendar with AD/BC era
/// semantics: the year is a nonzero signed integer in `MIN_YEAR..=MAX_YEAR`
/// (negative for BC, no year 0), and the day is always valid for its month.
///
/// A `Date` can only be obtained through the validating constructor, so
/// every operation works on known-good data; malformed dates are rejected
/// once, at construction, with a [`DateError`].
///
/// Ordering is lexicographic on (year, month, day), which matches
/// chronological order under the negative-BC convention.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{} {}, {} {}", "month.name()", "day.get()", "year.era()", "year.get()")]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for all fallible date operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year 0 (which does not exist in the AD/BC numbering), or a year
    /// outside `MIN_YEAR..=MAX_YEAR`.
    #[error("invalid year: {year} (must be nonzero, in {min}..={max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear { year: i32 },
    /// Month outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },
    /// Day outside the month's length (or 0).
    #[error("invalid day: {day} for month {month} of year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

/// Plain component form used for (de)serialization.
/// Deserializing re-validates through `Date::new`, so a `Date` can never be
/// smuggled in with out-of-range components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDate {
    year: i32,
    month: u8,
    day: u8,
}

impl From<Date> for RawDate {
    fn from(date: Date) -> Self {
        Self {
            year: date.year.get(),
            month: date.month.get(),
            day: date.day.get(),
        }
    }
}

impl TryFrom<RawDate> for Date {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl Date {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns the [`DateError`] variant for the first component that fails:
    /// `InvalidYear` for year 0, `InvalidMonth` for months outside 1..=12,
    /// `InvalidDay` for days outside the month's length (February's length
    /// honors the leap-year rule).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year, month)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Whether the raw components form a valid date.
    /// Defined as `Date::new(..).is_ok()` so the classifier and the
    /// constructor can never disagree.
    pub fn is_valid(year: i32, month: u8, day: u8) -> bool {
        Self::new(year, month, day).is_ok()
    }

    /// Returns the year component (raw signed value, negative for BC)
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month component (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Era tag for this date, from the sign of the year
    pub const fn era(&self) -> Era {
        self.year.era()
    }

    /// Whether this date falls in a leap year
    pub const fn leap_year(&self) -> bool {
        self.year.leap()
    }

    /// Advances this date by exactly one day, in place.
    ///
    /// Rolls over to day 1 of the next month from the last day of a month
    /// (honoring leap-year February), and from December 31 into the next
    /// year. Stepping past December 31 of 1 BC lands on January 1 of AD 1;
    /// year 0 is never produced.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` without mutating the date when the
    /// step would leave the supported year range (December 31 of `MAX_YEAR`).
    pub fn increment(&mut self) -> Result<(), DateError> {
        if self.year.get() == MAX_YEAR
            && self.month.get() == DECEMBER
            && self.day.get() == days_in_month(self.year.get(), self.month.get())
        {
            return Err(DateError::InvalidYear { year: MAX_YEAR + 1 });
        }
        self.step_forward();
        Ok(())
    }

    /// Moves this date back by exactly one day, in place. Inverse of
    /// [`Date::increment`]: from day 1 it lands on the last day of the
    /// previous month, and from January 1 of AD 1 on December 31 of 1 BC.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` without mutating the date when the
    /// step would leave the supported year range (January 1 of `MIN_YEAR`).
    pub fn decrement(&mut self) -> Result<(), DateError> {
        if self.year.get() == MIN_YEAR && self.month.get() == JANUARY && self.day.get() == MIN_DAY {
            return Err(DateError::InvalidYear { year: MIN_YEAR - 1 });
        }
        self.step_backward();
        Ok(())
    }

    /// The date one day after this one
    ///
    /// # Errors
    /// Same range edge as [`Date::increment`].
    pub fn next(self) -> Result<Self, DateError> {
        let mut date = self;
        date.increment()?;
        Ok(date)
    }

    /// The date one day before this one
    ///
    /// # Errors
    /// Same range edge as [`Date::decrement`].
    pub fn previous(self) -> Result<Self, DateError> {
        let mut date = self;
        date.decrement()?;
        Ok(date)
    }

    /// One day forward; the caller guards the `MAX_YEAR` edge
    fn step_forward(&mut self) {
        if self.day.get() < days_in_month(self.year.get(), self.month.get()) {
            self.day = self.day.succ();
        } else {
            if self.month.get() == DECEMBER {
                self.year = self.year.succ();
            }
            self.month = self.month.succ();
            self.day = Day::first();
        }
    }

    /// One day backward; the caller guards the `MIN_YEAR` edge
    fn step_backward(&mut self) {
        if self.day.get() > MIN_DAY {
            self.day = self.day.pred();
        } else {
            if self.month.get() == JANUARY {
                self.year = self.year.pred();
            }
            self.month = self.month.pred();
            self.day = Day::last_of(self.year.get(), self.month.get());
        }
    }

    /// Signed number of days from `other` to `self`: 0 when equal, positive
    /// when `self` is after `other`, negative when before.
    ///
    /// Computed by stepping a cursor copy of `other` one day at a time
    /// toward `self`, so era-crossing counts follow the no-year-0 sequence
    /// exactly; the count is an `i64` and cannot overflow.
    pub fn delta(self, other: Self) -> i64 {
        let mut cursor = other;
        let mut count: i64 = 0;
        // The cursor moves strictly between two valid dates, so it never
        // touches the MIN_YEAR/MAX_YEAR edges
        match self.cmp(&other) {
            Ordering::Equal => count,
            Ordering::Greater => {
                while cursor != self {
                    cursor.step_forward();
                    count += 1;
                }
                count
            }
            Ordering::Less => {
                while cursor != self {
                    cursor.step_backward();
                    count -= 1;
                }
                count
            }
        }
    }
}
