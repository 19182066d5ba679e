//! Gregorian calendar arithmetic shared by [`crate::Date`].
//!
//! Every function here is pure and works on raw integers, so callers can ask
//! about a triple before committing it to a `Date`.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MARCH, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR,
};

/// Days in a common year
const DAYS_PER_YEAR: i32 = 365;
/// Months added when January and February are moved to the end of the previous year
const MONTHS_PER_YEAR: i32 = 12;
/// Cumulative days of the shifted months are `(month + 1) * 306 / 10`
const MONTH_DAYS_NUMERATOR: i32 = 306;
const MONTH_DAYS_DENOMINATOR: i32 = 10;
/// Aligns the first of March with the month term above
const DAY_OFFSET: i32 = 62;

/// Returns true if `year` has a 29th of February.
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not in `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    if month < MIN_MONTH || month > MAX_MONTH {
        return None;
    }

    Some(month_length(year, month))
}

/// Unchecked `days_in_month` for months already known to be valid.
pub(crate) const fn month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year as i32) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Decides whether `(day, month, year)` names a real calendar day.
///
/// Years are limited to `0..=9999`.
pub fn is_valid_date(day: i32, month: i32, year: i32) -> bool {
    if year < i32::from(MIN_YEAR) || year > i32::from(MAX_YEAR) {
        return false;
    }

    if month < i32::from(MIN_MONTH) || month > i32::from(MAX_MONTH) {
        return false;
    }

    if day < i32::from(MIN_DAY) {
        return false;
    }

    match month {
        2 if is_leap_year(year) => day <= 29,
        2 => day <= 28,
        4 | 6 | 9 | 11 => day <= 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => day <= 31,
        _ => false,
    }
}

/// Maps a date to a day count that grows by exactly one per calendar day.
///
/// The count has no meaningful epoch: it exists so that two dates can be
/// ordered and subtracted. January and February are counted as months 13 and
/// 14 of the previous year, which puts the leap day at the end of the
/// computational year.
pub const fn absolute_day_number(day: i32, month: i32, year: i32) -> i32 {
    let (month, year) = if month < MARCH as i32 {
        (month + MONTHS_PER_YEAR, year - 1)
    } else {
        (month, year)
    };

    // Floor division: January and February of year 0 land in year -1.
    DAYS_PER_YEAR * year + year.div_euclid(LEAP_YEAR_CYCLE) - year.div_euclid(CENTURY_CYCLE)
        + year.div_euclid(GREGORIAN_CYCLE)
        + (month + 1) * MONTH_DAYS_NUMERATOR / MONTH_DAYS_DENOMINATOR
        + (day - DAY_OFFSET)
}
