//! One-call computation of a year: day table, months and festivals.

use panchanga_anga::names::{
    LUNAR_MONTH_NAMES, NAKSHATRA_NAMES, TITHI_NAMES, YOGA_NAMES, karana_name, name_at,
};
use panchanga_anga::{EphemerisProvider, GeoLocation};
use panchanga_calendar::{MonthDate, MonthSystem, YearTable};
use panchanga_time::{CivilDate, ZoneOffset};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::PanchangaConfig;
use crate::day_map::FestivalDayMap;
use crate::diagnostics::Diagnostics;
use crate::engine::FestivalRuleEngine;
use crate::error::FestivalError;
use crate::names::VAARA_NAMES;

/// A computed year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualPanchanga {
    pub table: YearTable,
    pub festivals: FestivalDayMap,
    pub diagnostics: Diagnostics,
}

/// Flat per-day row for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub index: usize,
    pub date: CivilDate,
    pub weekday: u8,
    pub vaara: &'static str,
    /// Local clock times in the configured format.
    pub sunrise: String,
    pub sunset: String,
    pub sidereal_solar: MonthDate,
    pub tropical_solar: MonthDate,
    pub lunar: MonthDate,
    pub lunar_month_name: Option<&'static str>,
    pub islamic: MonthDate,
    pub tithi: u32,
    pub tithi_name: Option<&'static str>,
    pub nakshatra: u32,
    pub nakshatra_name: Option<&'static str>,
    pub yoga: u32,
    pub yoga_name: Option<&'static str>,
    pub karana: u32,
    pub karana_name: Option<&'static str>,
    pub festivals: Vec<String>,
}

impl AnnualPanchanga {
    #[instrument(skip_all, fields(year = year))]
    pub fn compute(
        provider: &dyn EphemerisProvider,
        location: GeoLocation,
        zone: &dyn ZoneOffset,
        year: i32,
        config: &PanchangaConfig,
    ) -> Result<Self, FestivalError> {
        config.validate().map_err(FestivalError::InvalidConfig)?;
        let table = YearTable::build(provider, location, zone, year, config.calendar)?;
        let (festivals, diagnostics) =
            FestivalRuleEngine::new(&table, provider, &config.festivals)?.run();
        info!(
            festivals = festivals.len(),
            failures = diagnostics.failures().count(),
            "year computed"
        );
        Ok(Self {
            table,
            festivals,
            diagnostics,
        })
    }

    pub fn festivals_on(&self, d: usize) -> Vec<&str> {
        self.festivals.festivals_on(d)
    }

    /// One record per day `1..=duration`.
    pub fn day_records(&self) -> Vec<DayRecord> {
        let fmt = self.table.config.hour_format;
        self.table
            .days
            .year_days()
            .filter_map(|day| {
                let d = day.index;
                let date = |system| self.table.month_date(system, d);
                let angas = &day.angas;
                let lunar = date(MonthSystem::Lunar)?;
                Some(DayRecord {
                    index: d,
                    date: day.date,
                    weekday: day.weekday,
                    vaara: VAARA_NAMES[usize::from(day.weekday % 7)],
                    sunrise: day.local_hour(day.sunrise).format(fmt),
                    sunset: day.local_hour(day.sunset).format(fmt),
                    sidereal_solar: date(MonthSystem::SiderealSolar)?,
                    tropical_solar: date(MonthSystem::TropicalSolar)?,
                    lunar,
                    lunar_month_name: name_at(&LUNAR_MONTH_NAMES, lunar.month),
                    islamic: date(MonthSystem::Islamic)?,
                    tithi: angas.tithi.index,
                    tithi_name: name_at(&TITHI_NAMES, angas.tithi.index),
                    nakshatra: angas.nakshatra.index,
                    nakshatra_name: name_at(&NAKSHATRA_NAMES, angas.nakshatra.index),
                    yoga: angas.yoga.index,
                    yoga_name: name_at(&YOGA_NAMES, angas.yoga.index),
                    karana: angas.karana.index,
                    karana_name: karana_name(angas.karana.index),
                    festivals: self.festivals_on(d).into_iter().map(String::from).collect(),
                })
            })
            .collect()
    }
}
