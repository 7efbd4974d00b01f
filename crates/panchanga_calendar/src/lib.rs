//! Per-year panchanga table: day boundaries and the four month systems.
//!
//! Building a [`YearTable`] resolves, for every civil day of a year plus one
//! padding day on each side:
//! - sunrise, sunset, weekday and UTC offset
//! - tithi, karana, yoga, nakshatra and moon-sign spans at sunrise
//! - sidereal solar, tropical solar, lunar (amanta) and Islamic month dates
//!
//! The table is immutable once built.

pub mod boundary;
pub mod config;
pub mod day;
pub mod error;
pub mod month;
pub mod month_state;
pub mod year;

pub use boundary::{DayBoundaryResolver, SunTimes};
pub use config::CalendarConfig;
pub use day::{Day, DayAngas, DayTable};
pub use error::CalendarError;
pub use month::{MonthSystemCalculator, TropicalTransit};
pub use month_state::{MonthDate, MonthSystem, MonthSystemState, MonthTable};
pub use year::YearTable;
