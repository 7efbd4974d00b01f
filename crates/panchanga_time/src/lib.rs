//! Civil-time support for panchanga computation.
//!
//! This crate provides:
//! - Julian Date <-> Gregorian conversions in UT
//! - Validated civil dates and the tabular Islamic calendar
//! - Local clock hours with the beyond-24h display convention
//! - UTC offset lookup for any `chrono` time zone

pub mod civil;
pub mod error;
pub mod hour;
pub mod islamic;
pub mod julian;
pub mod zone;

pub use civil::{CivilDate, days_in_year};
pub use error::TimeError;
pub use hour::{Hour, HourFormat};
pub use islamic::IslamicDate;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_jdn, jd_to_utc_gregorian,
    utc_gregorian_to_jd, weekday_from_jdn,
};
pub use zone::{OFFSET_SAMPLE_HOUR, ZoneOffset};
