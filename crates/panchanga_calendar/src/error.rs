//! Error types for year-table construction.

use panchanga_anga::{AngaError, EphemerisError};
use panchanga_time::{CivilDate, TimeError};
use thiserror::Error;

use crate::month_state::MonthSystem;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    #[error("sun does not rise on {date}")]
    SunNeverRises { date: CivilDate },
    #[error("sun does not set on {date}")]
    SunNeverSets { date: CivilDate },
    /// sunrise < sunset < next sunrise does not hold.
    #[error("day boundaries out of order on {date}")]
    NonMonotonicDay { date: CivilDate },
    /// A month system left a day without a month after the final fill.
    #[error("{system:?} month missing for day {day}")]
    IncompleteMonthFill { system: MonthSystem, day: usize },
    #[error("no new moon found near JD {jd}")]
    NewMoonNotFound { jd: f64 },
    #[error("invalid calendar config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Anga(#[from] AngaError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
