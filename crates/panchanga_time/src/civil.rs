//! Civil (Gregorian) calendar dates.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_jdn, jd_to_utc_gregorian, weekday_from_jdn};

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Build a date, rejecting impossible triples such as Feb 30.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|_| Self { year, month, day })
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    /// The calendar date on which `jd` falls (no zone shift applied).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day, _) = jd_to_utc_gregorian(jd);
        Self { year, month, day }
    }

    /// Julian Date at 00:00 of this date.
    pub fn jd_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Julian Day Number (the integer JD at noon of this date).
    pub fn jdn(&self) -> i64 {
        jd_to_jdn(self.jd_midnight())
    }

    /// Weekday, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        weekday_from_jdn(self.jdn())
    }

    /// The date `n` days later (or earlier when negative).
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_jd(self.jd_midnight() + n as f64 + 0.5)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Number of days in a Gregorian year.
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}
