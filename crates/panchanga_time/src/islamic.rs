//! Tabular (arithmetic) Islamic calendar.
//!
//! 30-year intercalation cycle with 11 leap years, epoch 1 Muharram 1 AH =
//! JDN 1948440 (civil reckoning). Valid for dates on or after the epoch.

use serde::{Deserialize, Serialize};

use crate::civil::CivilDate;

/// JDN of 1 Muharram 1 AH.
pub const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;

/// A date in the tabular Islamic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IslamicDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl IslamicDate {
    pub fn from_jdn(jdn: i64) -> Self {
        let mut l = jdn - ISLAMIC_EPOCH_JDN + 10_632;
        let n = (l - 1) / 10_631;
        l = l - 10_631 * n + 354;
        let j = ((10_985 - l) / 5_316) * ((50 * l) / 17_719) + (l / 5_670) * ((43 * l) / 15_238);
        l = l - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
        let month = (24 * l) / 709;
        let day = l - (709 * month) / 24;
        let year = 30 * n + j - 30;
        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    pub fn from_civil(date: &CivilDate) -> Self {
        Self::from_jdn(date.jdn())
    }
}
