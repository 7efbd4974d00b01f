//! The immutable per-year table: days plus the four month systems.

use panchanga_anga::{AngaSpanFinder, EphemerisProvider, GeoLocation};
use panchanga_time::ZoneOffset;
use serde::Serialize;
use tracing::{info, instrument};

use crate::boundary::DayBoundaryResolver;
use crate::config::CalendarConfig;
use crate::day::{Day, DayTable};
use crate::error::CalendarError;
use crate::month::{MonthSystemCalculator, TropicalTransit};
use crate::month_state::{MonthDate, MonthSystem, MonthTable};

/// Everything the festival rules read, built once per year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearTable {
    pub location: GeoLocation,
    pub config: CalendarConfig,
    pub days: DayTable,
    pub sidereal_solar: MonthTable,
    pub tropical_solar: MonthTable,
    pub lunar: MonthTable,
    pub islamic: MonthTable,
    /// Tropical sign changes committed during the year, in order.
    pub tropical_transits: Vec<TropicalTransit>,
}

impl YearTable {
    /// Resolve days and month systems for the civil `year` at `location`.
    #[instrument(skip_all, fields(year = year))]
    pub fn build(
        provider: &dyn EphemerisProvider,
        location: GeoLocation,
        zone: &dyn ZoneOffset,
        year: i32,
        config: CalendarConfig,
    ) -> Result<Self, CalendarError> {
        config.validate().map_err(CalendarError::InvalidConfig)?;
        let finder = AngaSpanFinder::new(provider, config.search)?;

        let days = DayBoundaryResolver::new(finder, location, zone, config).resolve_year(year)?;

        let months = MonthSystemCalculator::new(finder, &days, config);
        let sidereal_solar = months.sidereal_solar()?;
        let (tropical_solar, tropical_transits) = months.tropical_solar(&sidereal_solar)?;
        let lunar = months.lunar()?;
        let islamic = months.islamic()?;

        info!(
            duration = days.duration,
            transits = tropical_transits.len(),
            "year table built"
        );
        Ok(Self {
            location,
            config,
            days,
            sidereal_solar,
            tropical_solar,
            lunar,
            islamic,
            tropical_transits,
        })
    }

    pub fn duration(&self) -> usize {
        self.days.duration
    }

    pub fn day(&self, d: usize) -> Option<&Day> {
        self.days.get(d)
    }

    pub fn months(&self, system: MonthSystem) -> &MonthTable {
        match system {
            MonthSystem::SiderealSolar => &self.sidereal_solar,
            MonthSystem::TropicalSolar => &self.tropical_solar,
            MonthSystem::Lunar => &self.lunar,
            MonthSystem::Islamic => &self.islamic,
        }
    }

    pub fn month_date(&self, system: MonthSystem, d: usize) -> Option<MonthDate> {
        self.months(system).get(d)
    }

    /// Sidereal solar month of day `d`.
    pub fn solar_month(&self, d: usize) -> Option<u32> {
        self.sidereal_solar.month(d)
    }

    /// Day of the sidereal solar month.
    pub fn solar_month_day(&self, d: usize) -> Option<u32> {
        self.sidereal_solar.day(d)
    }

    pub fn lunar_month(&self, d: usize) -> Option<u32> {
        self.lunar.month(d)
    }

    /// Whether `d` is inside the year proper (1..=duration).
    pub fn in_year(&self, d: i64) -> bool {
        d >= 1 && d <= self.duration() as i64
    }
}
