//! The four month systems over a resolved day table.
//!
//! Sidereal solar months follow the Sun's sign at sunset. Tropical months
//! are committed lazily: at each sidereal month start the next tropical
//! sign change is located and the ending month is backfilled through the
//! sunrise-day of that change. Lunar months run new moon to new moon.
//! Islamic months are arithmetic.

use panchanga_anga::{AngaSpanFinder, AngaType, Ayanamsha};
use panchanga_time::{Hour, IslamicDate, jd_to_utc_gregorian, utc_gregorian_to_jd};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::day::DayTable;
use crate::error::CalendarError;
use crate::month_state::{MonthSystem, MonthSystemState, MonthTable};

/// Lookback covering any solar month.
const SOLAR_MONTH_LOOKBACK_DAYS: f64 = 33.0;
/// Lookahead covering any lunation.
const LUNATION_WINDOW_DAYS: f64 = 31.0;

/// A tropical sign change and the day it was committed to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TropicalTransit {
    /// Sidereal month-start day whose search found this transit.
    pub trigger_day: usize,
    /// Transit instant (JD UT).
    pub jd: f64,
    /// Sunrise-day holding the transit.
    pub day: usize,
    /// Local time of the transit against `day`'s date; >= 24 when the
    /// transit falls before the next civil date's sunrise.
    pub display_hour: Hour,
    /// Tropical month that ends at this transit.
    pub ending_month: u32,
}

/// Computes month numbering for every day of a [`DayTable`].
pub struct MonthSystemCalculator<'a> {
    finder: AngaSpanFinder<'a>,
    days: &'a DayTable,
    config: CalendarConfig,
}

impl<'a> MonthSystemCalculator<'a> {
    pub fn new(finder: AngaSpanFinder<'a>, days: &'a DayTable, config: CalendarConfig) -> Self {
        Self {
            finder,
            days,
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Sidereal solar
    // -----------------------------------------------------------------------

    /// Month = Sun's sidereal sign at sunset; a new month starts on the first
    /// day whose sunset follows the sankranti.
    pub fn sidereal_solar(&self) -> Result<MonthTable, CalendarError> {
        let frame = self.config.ayanamsha;
        let mut state = MonthSystemState::new(MonthSystem::SiderealSolar, self.days.len());
        let mut prev: Option<u32> = None;
        for day in self.days.all() {
            let month = self.finder.index_at(AngaType::SolarRaashi, day.sunset, frame)?;
            if let Some(p) = prev.filter(|&p| p != month) {
                state.backfill(day.index - 1, p, false);
            }
            prev = Some(month);
        }
        if let Some(p) = prev {
            state.fill_remaining(p, false);
        }

        let first_day = match self.days.get(0) {
            Some(day0) => {
                let sankranti = self.finder.previous_transit(
                    AngaType::SolarRaashi,
                    day0.sunset,
                    SOLAR_MONTH_LOOKBACK_DAYS,
                    frame,
                )?;
                match sankranti {
                    // Sunsets are one day apart to well under a minute.
                    Some(jd) => (day0.sunset - jd).floor() as u32 + 1,
                    None => {
                        warn!("no sankranti before year start, seeding day 1");
                        1
                    }
                }
            }
            None => 1,
        };
        let days = state.days_from_changes(first_day);
        state.finalize(&days)
    }

    // -----------------------------------------------------------------------
    // Tropical solar
    // -----------------------------------------------------------------------

    /// Tropical months, committed at each transit's sunrise-day.
    pub fn tropical_solar(
        &self,
        sidereal: &MonthTable,
    ) -> Result<(MonthTable, Vec<TropicalTransit>), CalendarError> {
        let duration = self.days.duration;
        let mut state = MonthSystemState::new(MonthSystem::TropicalSolar, self.days.len());
        let mut transits = Vec::new();
        let mut last_month: Option<u32> = None;

        for d in 1..=duration {
            if sidereal.day(d) != Some(1) {
                continue;
            }
            let (Some(day), Some(ending_month)) = (self.days.get(d), sidereal.month(d)) else {
                continue;
            };
            let Some(transit) = self.finder.next_transit(
                AngaType::SolarRaashi,
                day.sunrise,
                day.sunrise + self.config.tropical_lookahead_days,
                Ayanamsha::Tropical,
            )?
            else {
                warn!(day = d, "no tropical transit within lookahead");
                continue;
            };

            let (civil_day, hour) = self.civil_day_of(transit.jd, day.utc_offset_hours);
            if civil_day > duration as i64 {
                debug!(day = d, civil_day, "tropical transit beyond year end");
                continue;
            }
            let Some((fday, display_hour)) = self.to_sunrise_day(transit.jd, civil_day, hour)
            else {
                continue;
            };

            transits.push(TropicalTransit {
                trigger_day: d,
                jd: transit.jd,
                day: fday,
                display_hour,
                ending_month,
            });
            state.backfill(fday, ending_month, false);
            last_month = Some(ending_month);
        }

        let trailing = match last_month {
            Some(m) => m % 12 + 1,
            None => self.tropical_sign_at_day(1)?,
        };
        state.fill_remaining(trailing, false);

        let first_day = self.tropical_first_day()?;
        let days = state.days_from_changes(first_day);
        Ok((state.finalize(&days)?, transits))
    }

    /// Civil day index and local hour of `jd`, using the offset of the
    /// triggering day.
    fn civil_day_of(&self, jd: f64, utc_offset_hours: f64) -> (i64, f64) {
        let (y, m, d, hour) = jd_to_utc_gregorian(jd + utc_offset_hours / 24.0);
        let civil_day = self
            .days
            .civil_day_index(utc_gregorian_to_jd(y, m, d, 0.0));
        (civil_day, hour)
    }

    /// A transit before its civil day's sunrise belongs to the previous
    /// sunrise-day and is shown at 24h or later.
    fn to_sunrise_day(&self, jd: f64, civil_day: i64, hour: f64) -> Option<(usize, Hour)> {
        let index = usize::try_from(civil_day).ok()?;
        let sunrise = self.days.get(index)?.sunrise;
        if jd < sunrise {
            Some((index.checked_sub(1)?, Hour(hour + 24.0)))
        } else {
            Some((index, Hour(hour)))
        }
    }

    fn tropical_sign_at_day(&self, d: usize) -> Result<u32, CalendarError> {
        let Some(day) = self.days.get(d) else {
            return Ok(1);
        };
        Ok(self
            .finder
            .index_at(AngaType::SolarRaashi, day.sunrise, Ayanamsha::Tropical)?)
    }

    /// Day-of-month of padding day 0, from the tropical transits preceding day 1.
    fn tropical_first_day(&self) -> Result<u32, CalendarError> {
        let (Some(day0), Some(day1)) = (self.days.get(0), self.days.get(1)) else {
            return Ok(1);
        };
        let mut before = day1.sunrise;
        for _ in 0..2 {
            let Some(jd) = self.finder.previous_transit(
                AngaType::SolarRaashi,
                before,
                SOLAR_MONTH_LOOKBACK_DAYS,
                Ayanamsha::Tropical,
            )?
            else {
                break;
            };
            // Sunrise-day of the transit, taking earlier sunrises one day apart.
            let fday = (jd - day0.sunrise).floor() as i64;
            if fday < 0 {
                return Ok(u32::try_from(-fday).unwrap_or(1));
            }
            // Day 0 closes a month; count from the transit before it.
            before = jd - 1e-3;
        }
        Ok(1)
    }

    // -----------------------------------------------------------------------
    // Lunar (amanta)
    // -----------------------------------------------------------------------

    /// New moons (JD UT) bracketing every sunrise of the table.
    fn new_moons(&self) -> Result<Vec<f64>, CalendarError> {
        let all = self.days.all();
        let (Some(first), Some(last)) = (all.first(), all.last()) else {
            return Ok(Vec::new());
        };
        let frame = self.config.ayanamsha;
        let mut moons = Vec::new();
        let mut t = first.sunrise - LUNATION_WINDOW_DAYS;
        while moons.last().is_none_or(|&nm| nm <= last.next_sunrise) {
            let span = self
                .finder
                .find(AngaType::Tithi, 30, t, t + LUNATION_WINDOW_DAYS, frame)?;
            let nm = span.end.ok_or(CalendarError::NewMoonNotFound { jd: t })?;
            moons.push(nm);
            t = nm + 1.0;
        }
        Ok(moons)
    }

    /// Amanta months. A month takes the number of the Sun's sidereal sign at
    /// its closing new moon; when the sign is the same at both new moons the
    /// month is adhika and numbered after the following sign.
    pub fn lunar(&self) -> Result<MonthTable, CalendarError> {
        let frame = self.config.ayanamsha;
        let moons = self.new_moons()?;
        let mut state = MonthSystemState::new(MonthSystem::Lunar, self.days.len());

        let lunation_month = |k: usize| -> Result<(u32, bool), CalendarError> {
            let (Some(&open), Some(&close)) = (moons.get(k), moons.get(k + 1)) else {
                return Err(CalendarError::NewMoonNotFound {
                    jd: moons.last().copied().unwrap_or_default(),
                });
            };
            let s_open = self.finder.index_at(AngaType::SolarRaashi, open, frame)?;
            let s_close = self.finder.index_at(AngaType::SolarRaashi, close, frame)?;
            if s_open == s_close {
                Ok((s_close % 12 + 1, true))
            } else {
                Ok((s_close, false))
            }
        };

        let mut prev: Option<(usize, (u32, bool))> = None;
        let mut k = 0;
        for day in self.days.all() {
            while moons.get(k + 1).is_some_and(|&nm| nm <= day.sunrise) {
                k += 1;
            }
            match prev {
                Some((pk, _)) if pk == k => {}
                Some((_, (m, adhika))) => {
                    state.backfill(day.index - 1, m, adhika);
                    prev = Some((k, lunation_month(k)?));
                }
                None => prev = Some((k, lunation_month(k)?)),
            }
        }
        if let Some((_, (m, adhika))) = prev {
            state.fill_remaining(m, adhika);
        }

        let days: Vec<u32> = self
            .days
            .all()
            .iter()
            .map(|day| day.angas.tithi.index)
            .collect();
        state.finalize(&days)
    }

    // -----------------------------------------------------------------------
    // Islamic
    // -----------------------------------------------------------------------

    pub fn islamic(&self) -> Result<MonthTable, CalendarError> {
        let mut state = MonthSystemState::new(MonthSystem::Islamic, self.days.len());
        let dates: Vec<IslamicDate> = self
            .days
            .all()
            .iter()
            .map(|day| IslamicDate::from_civil(&day.date))
            .collect();
        for (d, pair) in dates.windows(2).enumerate() {
            if pair[0].month != pair[1].month {
                state.backfill(d, pair[0].month, false);
            }
        }
        if let Some(last) = dates.last() {
            state.fill_remaining(last.month, false);
        }
        let days: Vec<u32> = dates.iter().map(|date| date.day).collect();
        state.finalize(&days)
    }
}
