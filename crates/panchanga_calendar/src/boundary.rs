//! Day boundaries: sunrise, sunset, weekday and sunrise angas per civil day.

use panchanga_anga::{AngaSpanFinder, AngaType, GeoLocation, RiseSetEvent};
use panchanga_time::{CivilDate, OFFSET_SAMPLE_HOUR, ZoneOffset, days_in_year};
use tracing::{debug, trace};

use crate::config::CalendarConfig;
use crate::day::{Day, DayAngas, DayTable};
use crate::error::CalendarError;

/// Sunrise and sunset of one civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: f64,
    pub sunset: f64,
}

/// Resolves the sunrise-to-sunrise days of a year at one location.
pub struct DayBoundaryResolver<'a> {
    finder: AngaSpanFinder<'a>,
    location: GeoLocation,
    zone: &'a dyn ZoneOffset,
    config: CalendarConfig,
}

impl<'a> DayBoundaryResolver<'a> {
    pub fn new(
        finder: AngaSpanFinder<'a>,
        location: GeoLocation,
        zone: &'a dyn ZoneOffset,
        config: CalendarConfig,
    ) -> Self {
        Self {
            finder,
            location,
            zone,
            config,
        }
    }

    /// Sunrise and sunset of `date`.
    pub fn sun_times(&self, date: CivilDate) -> Result<SunTimes, CalendarError> {
        let noon = self.location.approximate_local_noon_jd(date.jd_midnight());
        let provider = self.finder.provider();
        let sunrise = provider
            .rise_set(RiseSetEvent::Sunrise, noon, &self.location)?
            .ok_or(CalendarError::SunNeverRises { date })?;
        let sunset = provider
            .rise_set(RiseSetEvent::Sunset, noon, &self.location)?
            .ok_or(CalendarError::SunNeverSets { date })?;
        Ok(SunTimes { sunrise, sunset })
    }

    /// UTC offset in hours in force at local 06:00 of `date`.
    pub fn utc_offset_hours(&self, date: CivilDate) -> Result<f64, CalendarError> {
        Ok(self
            .zone
            .utc_offset_hours(date.year, date.month, date.day, OFFSET_SAMPLE_HOUR)?)
    }

    /// Anga spans holding at `sunrise`.
    pub fn sunrise_angas(&self, sunrise: f64) -> Result<DayAngas, CalendarError> {
        let frame = self.config.ayanamsha;
        Ok(DayAngas {
            tithi: self.finder.span_at(AngaType::Tithi, sunrise, frame)?,
            karana: self.finder.span_at(AngaType::Karana, sunrise, frame)?,
            yoga: self.finder.span_at(AngaType::Yoga, sunrise, frame)?,
            nakshatra: self.finder.span_at(AngaType::Nakshatra, sunrise, frame)?,
            raashi: self.finder.span_at(AngaType::Raashi, sunrise, frame)?,
        })
    }

    /// Build the day table for `year`, with padding days 0 and `duration + 1`.
    pub fn resolve_year(&self, year: i32) -> Result<DayTable, CalendarError> {
        let jan1 = CivilDate::new(year, 1, 1)?;
        let duration = days_in_year(year) as usize;

        // One extra date so the last padding day knows its next sunrise.
        let dates: Vec<CivilDate> = (0..=duration + 2)
            .map(|i| jan1.add_days(i as i64 - 1))
            .collect();
        let times = dates
            .iter()
            .map(|&date| self.sun_times(date))
            .collect::<Result<Vec<_>, _>>()?;

        let mut days = Vec::with_capacity(duration + 2);
        for index in 0..=duration + 1 {
            let date = dates[index];
            let SunTimes { sunrise, sunset } = times[index];
            let next_sunrise = times[index + 1].sunrise;
            if !(sunrise < sunset && sunset < next_sunrise) {
                return Err(CalendarError::NonMonotonicDay { date });
            }

            let utc_offset_hours = self.utc_offset_hours(date)?;
            let weekday = CivilDate::from_jd(sunrise + utc_offset_hours / 24.0).weekday();
            let angas = self.sunrise_angas(sunrise)?;
            trace!(index, %date, sunrise, sunset, weekday, "day resolved");

            days.push(Day {
                index,
                date,
                sunrise,
                sunset,
                next_sunrise,
                weekday,
                utc_offset_hours,
                angas,
            });
        }

        debug!(year, duration, "day boundaries resolved");
        Ok(DayTable::new(year, jan1.jd_midnight(), duration, days))
    }
}
