mod calendar;
mod consts;
mod prelude;

pub use calendar::{absolute_day_number, days_in_month, is_leap_year, is_valid_date};
pub use consts::*;

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A day of the Gregorian calendar between 01/01/0000 and 31/12/9999.
///
/// A `Date` is never invalid. [`Date::new`] and the `set_*` methods never
/// fail: invalid input yields the fallback date 01/01/2000 or leaves the date
/// untouched. The `try_*` and `with_*` methods report the same failures as a
/// [`DateError`] instead.
///
/// Fields are declared year first so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{day:02}/{month:02}/{year:04}")]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The triple does not name a calendar day in the supported range.
    #[error("Invalid date: {day}/{month}/{year}")]
    InvalidDate { day: i32, month: i32, year: i32 },

    /// Text that is not `DD/MM/YYYY`.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}

impl Date {
    /// Substituted by [`Date::new`] for invalid input.
    pub const FALLBACK: Self = Self {
        year: FALLBACK_YEAR,
        month: FALLBACK_MONTH,
        day: FALLBACK_DAY,
    };

    /// Earliest representable date, 01/01/0000.
    pub const MIN: Self = Self {
        year: MIN_YEAR,
        month: JANUARY,
        day: MIN_DAY,
    };

    /// Latest representable date, 31/12/9999.
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: DECEMBER,
        day: DAYS_IN_MONTH[DECEMBER as usize],
    };

    /// Creates a date, falling back to [`Date::FALLBACK`] if the triple is invalid.
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self::try_new(day, month, year).unwrap_or_else(|_err| {
            #[cfg(feature = "log")]
            log::debug!("{_err}, using {} instead", Self::FALLBACK);
            Self::FALLBACK
        })
    }

    /// Creates a date, rejecting invalid triples.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the triple is not a calendar day in `0..=9999`.
    pub fn try_new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidDate { day, month, year };

        if !is_valid_date(day, month, year) {
            return Err(invalid());
        }

        Ok(Self {
            year: u16::try_from(year).map_err(|_| invalid())?,
            month: u8::try_from(month).map_err(|_| invalid())?,
            day: u8::try_from(day).map_err(|_| invalid())?,
        })
    }

    /// Day of the month, `1..=31`
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Month, `1..=12`
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Year, `0..=9999`
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Components widened for arithmetic: (day, month, year)
    fn components(self) -> (i32, i32, i32) {
        (
            i32::from(self.day),
            i32::from(self.month),
            i32::from(self.year),
        )
    }

    /// Returns a copy with the day replaced.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the resulting date would be invalid.
    pub fn with_day(self, day: i32) -> Result<Self, DateError> {
        let (_, month, year) = self.components();
        Self::try_new(day, month, year)
    }

    /// Returns a copy with the month replaced.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the resulting date would be invalid.
    pub fn with_month(self, month: i32) -> Result<Self, DateError> {
        let (day, _, year) = self.components();
        Self::try_new(day, month, year)
    }

    /// Returns a copy with the year replaced.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the resulting date would be invalid.
    pub fn with_year(self, year: i32) -> Result<Self, DateError> {
        let (day, month, _) = self.components();
        Self::try_new(day, month, year)
    }

    /// Replaces the day, leaving the date unchanged on failure.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the resulting date would be invalid.
    pub fn try_set_day(&mut self, day: i32) -> Result<(), DateError> {
        *self = self.with_day(day)?;
        Ok(())
    }

    /// Replaces the month, leaving the date unchanged on failure.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the resulting date would be invalid.
    pub fn try_set_month(&mut self, month: i32) -> Result<(), DateError> {
        *self = self.with_month(month)?;
        Ok(())
    }

    /// Replaces the year, leaving the date unchanged on failure.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the resulting date would be invalid.
    pub fn try_set_year(&mut self, year: i32) -> Result<(), DateError> {
        *self = self.with_year(year)?;
        Ok(())
    }

    /// Sets the day if the result is a valid date, otherwise does nothing.
    pub fn set_day(&mut self, day: i32) {
        let result = self.try_set_day(day);
        self.log_rejected(result);
    }

    /// Sets the month if the result is a valid date, otherwise does nothing.
    pub fn set_month(&mut self, month: i32) {
        let result = self.try_set_month(month);
        self.log_rejected(result);
    }

    /// Sets the year if the result is a valid date, otherwise does nothing.
    pub fn set_year(&mut self, year: i32) {
        let result = self.try_set_year(year);
        self.log_rejected(result);
    }

    #[allow(clippy::unused_self)]
    fn log_rejected(&self, result: Result<(), DateError>) {
        #[cfg(feature = "log")]
        if let Err(err) = result {
            log::trace!("Keeping {self}: {err}");
        }

        #[cfg(not(feature = "log"))]
        let _ = result;
    }

    /// True if both dates name the same day.
    pub fn equals(&self, other: &Self) -> bool {
        self.day == other.day && self.month == other.month && self.year == other.year
    }

    /// True if `self` is strictly earlier than `other`.
    pub fn before(&self, other: &Self) -> bool {
        (self.year, self.month, self.day) < (other.year, other.month, other.day)
    }

    /// True if `self` is strictly later than `other`.
    pub fn after(&self, other: &Self) -> bool {
        !self.before(other) && !self.equals(other)
    }

    /// Position of this date on a continuous day count, see [`absolute_day_number`].
    pub fn day_number(&self) -> i32 {
        let (day, month, year) = self.components();
        absolute_day_number(day, month, year)
    }

    /// Number of days from `other` to `self`: positive when `self` is later.
    pub fn difference(&self, other: &Self) -> i32 {
        self.day_number() - other.day_number()
    }

    /// The following calendar day.
    ///
    /// The successor of 31/12/9999 is outside the supported range, so like any
    /// other invalid triple it becomes [`Date::FALLBACK`].
    pub fn tomorrow(&self) -> Self {
        let (day, month, year) = self.components();

        if is_valid_date(day + 1, month, year) {
            return Self::new(day + 1, month, year);
        }

        let (month, year) = if month < i32::from(MAX_MONTH) {
            (month + 1, year)
        } else {
            (i32::from(JANUARY), year + 1)
        };

        #[cfg(feature = "log")]
        if year > i32::from(MAX_YEAR) {
            log::warn!("Day after {self} is past year {MAX_YEAR}, using {}", Self::FALLBACK);
        }

        Self::new(i32::from(MIN_DAY), month, year)
    }

    /// True if this date's year has a 29th of February
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(i32::from(self.year))
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        calendar::month_length(self.year, self.month)
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Date {
    /// Helper to parse one numeric component with better error messages
    fn parse_component(s: &str) -> Result<i32, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses the `DD/MM/YYYY` form produced by `Display`.
    ///
    /// Unlike [`Date::new`], an invalid date is an error here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected DD{DATE_SEPARATOR}MM{DATE_SEPARATOR}YYYY, found {trimmed}"
            )));
        };

        Self::try_new(
            Self::parse_component(day)?,
            Self::parse_component(month)?,
            Self::parse_component(year)?,
        )
    }
}

impl TryFrom<(i32, i32, i32)> for Date {
    type Error = DateError;

    /// Builds from (day, month, year)
    fn try_from((day, month, year): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::try_new(day, month, year)
    }
}

impl From<Date> for (u8, u8, u16) {
    /// Splits into (day, month, year)
    fn from(date: Date) -> Self {
        (date.day, date.month, date.year)
    }
}

impl TryFrom<String> for Date {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}
