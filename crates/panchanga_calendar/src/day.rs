//! Per-day records and the day table of one year.

use panchanga_anga::{AngaSpan, AngaType};
use panchanga_time::{CivilDate, Hour};
use serde::Serialize;

/// Anga spans holding at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayAngas {
    pub tithi: AngaSpan,
    pub karana: AngaSpan,
    pub yoga: AngaSpan,
    pub nakshatra: AngaSpan,
    /// Moon's sign.
    pub raashi: AngaSpan,
}

impl DayAngas {
    pub fn get(&self, anga: AngaType) -> Option<&AngaSpan> {
        match anga {
            AngaType::Tithi => Some(&self.tithi),
            AngaType::Karana => Some(&self.karana),
            AngaType::Yoga => Some(&self.yoga),
            AngaType::Nakshatra => Some(&self.nakshatra),
            AngaType::Raashi => Some(&self.raashi),
            AngaType::SolarNakshatra | AngaType::SolarRaashi => None,
        }
    }
}

/// One civil day, sunrise to next sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Day {
    /// Index in the year: 1 = Jan 1; 0 and `duration + 1` are padding.
    pub index: usize,
    pub date: CivilDate,
    /// Sunrise (JD UT).
    pub sunrise: f64,
    /// Sunset (JD UT).
    pub sunset: f64,
    /// Sunrise of the following civil date (JD UT).
    pub next_sunrise: f64,
    /// 0 = Sunday .. 6 = Saturday, from the local date of sunrise.
    pub weekday: u8,
    /// UTC offset in hours at local 06:00 of `date`.
    pub utc_offset_hours: f64,
    pub angas: DayAngas,
}

impl Day {
    /// Shift a UT instant to local wall time (still in JD units).
    pub fn local_jd(&self, jd_ut: f64) -> f64 {
        jd_ut + self.utc_offset_hours / 24.0
    }

    /// Local clock hour of `jd_ut` counted from midnight starting this
    /// day's civil date. Instants after midnight read 24 and above.
    pub fn local_hour(&self, jd_ut: f64) -> Hour {
        Hour((self.local_jd(jd_ut) - self.date.jd_midnight()) * 24.0)
    }

    pub fn day_length(&self) -> f64 {
        self.sunset - self.sunrise
    }

    /// Bounds of the `part`-th (0-based) of `parts` equal divisions of daytime.
    pub fn daytime_part(&self, part: u32, parts: u32) -> (f64, f64) {
        let len = self.day_length() / f64::from(parts);
        let start = self.sunrise + len * f64::from(part);
        (start, start + len)
    }

    /// The aparahna: fourth fifth of daytime.
    pub fn aparahna(&self) -> (f64, f64) {
        self.daytime_part(3, 5)
    }
}

/// Immutable table of the days of one civil year, padded on both sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTable {
    pub year: i32,
    /// JD of 00:00 UT on Jan 1.
    pub jd_start_utc: f64,
    /// Number of days in the year.
    pub duration: usize,
    days: Vec<Day>,
}

impl DayTable {
    /// `days` must cover indices `0..=duration + 1` in order.
    pub(crate) fn new(year: i32, jd_start_utc: f64, duration: usize, days: Vec<Day>) -> Self {
        Self {
            year,
            jd_start_utc,
            duration,
            days,
        }
    }

    pub fn get(&self, d: usize) -> Option<&Day> {
        self.days.get(d)
    }

    /// All days including padding.
    pub fn all(&self) -> &[Day] {
        &self.days
    }

    /// Days `1..=duration`.
    pub fn year_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|d| (1..=self.duration).contains(&d.index))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// 1-based civil day index of a local wall-clock instant.
    ///
    /// May be `<= 0` or beyond `duration` for instants outside the year.
    pub fn civil_day_index(&self, local_jd: f64) -> i64 {
        (local_jd - self.jd_start_utc).floor() as i64 + 1
    }

    /// Sunrise-day index of `jd_ut`: the civil day of its local time, one
    /// less when it precedes that day's sunrise. May fall outside the year.
    pub fn sunrise_day_index(&self, jd_ut: f64, utc_offset_hours: f64) -> i64 {
        let civil = self.civil_day_index(jd_ut + utc_offset_hours / 24.0);
        let before_sunrise = usize::try_from(civil)
            .ok()
            .and_then(|i| self.days.get(i))
            .is_some_and(|day| jd_ut < day.sunrise);
        if before_sunrise { civil - 1 } else { civil }
    }

    /// Index of the day whose sunrise-to-sunrise interval contains `jd_ut`.
    pub fn sunrise_day_of(&self, jd_ut: f64) -> Option<usize> {
        let after = self.days.partition_point(|d| d.sunrise <= jd_ut);
        let day = self.days.get(after.checked_sub(1)?)?;
        (jd_ut < day.next_sunrise).then_some(day.index)
    }
}
