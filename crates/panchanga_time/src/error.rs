//! Error types for civil-time conversions.

use thiserror::Error;

/// Errors from civil date handling and time-zone lookups.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple is not a valid Gregorian date.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The hour is outside 0..24.
    #[error("invalid local hour {0}")]
    InvalidHour(u32),
    /// The local wall-clock time does not exist in the zone (DST gap).
    #[error("local time {year:04}-{month:02}-{day:02} {hour:02}:00 does not exist in zone")]
    NonexistentLocalTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    },
}
