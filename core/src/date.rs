// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::{Clock, ParseError};

const MONTHS_IN_YEAR: i32 = 12;

/// The default number of months ahead of today an event may be scheduled.
pub const SIX_MONTHS: u32 = 6;

/// A calendar date made of a year, a month and a day.
///
/// A `Date` is not necessarily valid: values parsed from user input are kept
/// as-is until [`Date::is_valid`] is checked. The ordering is lexicographic
/// over `(year, month, day)` and does not depend on validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    /// Creates a date without validating it.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month, 1-based.
    pub fn month(&self) -> i32 {
        self.month
    }

    /// The day of month, 1-based.
    pub fn day(&self) -> i32 {
        self.day
    }

    /// Whether the year is a leap year in the Gregorian calendar.
    pub fn is_leap_year(&self) -> bool {
        (self.year % 4 == 0 && self.year % 100 != 0) || self.year % 400 == 0
    }

    /// Whether this date exists in the calendar.
    pub fn is_valid(&self) -> bool {
        match days_in_month(self.month, self.is_leap_year()) {
            Some(max) => (1..=max).contains(&self.day),
            None => false,
        }
    }

    /// Whether this date comes strictly after today.
    pub fn is_future(&self, clock: &impl Clock) -> bool {
        *self > clock.today()
    }

    /// Whether this date is no later than six months from today.
    pub fn is_within_six_months(&self, clock: &impl Clock) -> bool {
        self.is_within_months(clock, SIX_MONTHS)
    }

    /// Whether this date is no later than `months` months from today.
    ///
    /// The horizon keeps today's day of month, so it may not be a valid date
    /// (31 August plus six months is 31 February). The comparison is purely
    /// positional and does not normalize it.
    pub fn is_within_months(&self, clock: &impl Clock, months: u32) -> bool {
        *self <= clock.today().add_months_positional(months)
    }

    fn add_months_positional(&self, months: u32) -> Self {
        let months = i32::try_from(months).unwrap_or(i32::MAX - MONTHS_IN_YEAR);
        let total = self.month.saturating_add(months);
        let (carry, month) = if total > MONTHS_IN_YEAR {
            ((total - 1) / MONTHS_IN_YEAR, (total - 1) % MONTHS_IN_YEAR + 1)
        } else {
            (0, total)
        };

        Self {
            year: self.year.saturating_add(carry),
            month,
            day: self.day,
        }
    }
}

fn days_in_month(month: i32, leap_year: bool) -> Option<i32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if leap_year => Some(29),
        2 => Some(28),
        _ => None,
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses `m/d/yyyy`. Empty segments are skipped and anything after the
    /// year is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/').filter(|a| !a.is_empty());
        let mut next = |field: &'static str| -> Result<i32, ParseError> {
            let part = parts.next().ok_or(ParseError::MissingField { field })?;
            part.parse().map_err(|e| ParseError::invalid_number(field, part, e))
        };

        let month = next("month")?;
        let day = next("day")?;
        let year = next("year")?;
        Ok(Self::new(year, month, day))
    }
}
