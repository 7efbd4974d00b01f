//! UTC offsets for local civil dates.

use chrono::{NaiveDate, Offset, TimeZone};

use crate::error::TimeError;

/// Local hour at which a day's UTC offset is sampled.
pub const OFFSET_SAMPLE_HOUR: u32 = 6;

/// Anything that can report the UTC offset in force at a local wall time.
pub trait ZoneOffset {
    /// Offset in hours (east positive) at local `hour`:00 of the civil date.
    fn utc_offset_hours(&self, year: i32, month: u32, day: u32, hour: u32)
    -> Result<f64, TimeError>;
}

impl<Tz: TimeZone> ZoneOffset for Tz {
    fn utc_offset_hours(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> Result<f64, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let naive = date
            .and_hms_opt(hour, 0, 0)
            .ok_or(TimeError::InvalidHour(hour))?;
        let local = self.from_local_datetime(&naive).earliest().ok_or(
            TimeError::NonexistentLocalTime {
                year,
                month,
                day,
                hour,
            },
        )?;
        Ok(f64::from(local.offset().fix().local_minus_utc()) / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn fixed_offset_ist() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let off = ist.utc_offset_hours(2024, 4, 13, OFFSET_SAMPLE_HOUR).unwrap();
        assert!((off - 5.5).abs() < 1e-12);
    }

    #[test]
    fn utc_is_zero() {
        assert_eq!(Utc.utc_offset_hours(2024, 1, 1, 6).unwrap(), 0.0);
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert!(matches!(
            Utc.utc_offset_hours(2024, 2, 30, 6),
            Err(TimeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn invalid_hour_is_rejected() {
        assert_eq!(
            Utc.utc_offset_hours(2024, 1, 1, 24),
            Err(TimeError::InvalidHour(24))
        );
    }
}
