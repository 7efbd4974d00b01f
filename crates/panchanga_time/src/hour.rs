//! Local clock hours with the beyond-24h convention.
//!
//! A panchanga day runs sunrise to sunrise, so an event after local midnight
//! but before the next sunrise is written against the earlier civil date with
//! an hour of 24 or more ("25:30" is 01:30 the next morning). The `*Star`
//! formats instead wrap the hour and mark it with a trailing `*`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an [`Hour`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourFormat {
    /// `25:30`
    #[default]
    HhMm,
    /// `25:30:15`
    HhMmSs,
    /// `01:30*`
    HhMmStar,
    /// `01:30:15*`
    HhMmSsStar,
}

impl HourFormat {
    fn wraps(self) -> bool {
        matches!(self, Self::HhMmStar | Self::HhMmSsStar)
    }

    fn with_seconds(self) -> bool {
        matches!(self, Self::HhMmSs | Self::HhMmSsStar)
    }
}

/// A fractional local clock hour, possibly >= 24.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Hour(pub f64);

impl Hour {
    pub fn format(self, fmt: HourFormat) -> String {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        let mut hours = self.0.abs();
        let mut star = "";
        if fmt.wraps() && hours >= 24.0 {
            hours -= 24.0;
            star = "*";
        }
        let total_seconds = (hours * 3600.0).round() as u64;
        let h = total_seconds / 3600;
        let m = (total_seconds % 3600) / 60;
        let s = total_seconds % 60;
        if fmt.with_seconds() {
            format!("{sign}{h:02}:{m:02}:{s:02}{star}")
        } else {
            format!("{sign}{h:02}:{m:02}{star}")
        }
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(HourFormat::HhMm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beyond_midnight_keeps_hour_above_24() {
        assert_eq!(Hour(25.5).to_string(), "25:30");
    }

    #[test]
    fn star_format_wraps() {
        assert_eq!(Hour(25.5).format(HourFormat::HhMmStar), "01:30*");
        assert_eq!(Hour(7.25).format(HourFormat::HhMmStar), "07:15");
    }

    #[test]
    fn seconds_are_rounded() {
        // 07:14:59.95 rounds up to 07:15:00
        let h = Hour(7.25 - 0.05 / 3600.0);
        assert_eq!(h.format(HourFormat::HhMmSs), "07:15:00");
        assert_eq!(h.format(HourFormat::HhMm), "07:15");
    }

    #[test]
    fn negative_hours_are_signed() {
        assert_eq!(Hour(-0.5).to_string(), "-00:30");
    }

    #[test]
    fn format_deserializes_from_snake_case() {
        let f: HourFormat = serde_json::from_str("\"hh_mm_ss_star\"").unwrap();
        assert_eq!(f, HourFormat::HhMmSsStar);
    }
}
