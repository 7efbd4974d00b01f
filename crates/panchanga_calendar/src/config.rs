//! Calendar construction settings.

use panchanga_anga::{Ayanamsha, SearchConfig};
use panchanga_time::HourFormat;
use serde::{Deserialize, Serialize};

/// Settings shared by every stage of the year build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Sidereal frame for solar months, nakshatras and yogas.
    pub ayanamsha: Ayanamsha,
    /// Boundary refinement settings.
    pub search: SearchConfig,
    /// Rendering of clock times in names and exports.
    pub hour_format: HourFormat,
    /// How far past a sidereal month start to look for the tropical
    /// sign change, in days (default 15).
    pub tropical_lookahead_days: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            ayanamsha: Ayanamsha::Lahiri,
            search: SearchConfig::default(),
            hour_format: HourFormat::HhMm,
            tropical_lookahead_days: 15.0,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.ayanamsha.is_sidereal() {
            return Err("ayanamsha must be a sidereal frame");
        }
        if !(self.tropical_lookahead_days > 0.0 && self.tropical_lookahead_days <= 32.0) {
            return Err("tropical_lookahead_days must be in (0, 32]");
        }
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CalendarConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_tropical_frame() {
        let cfg = CalendarConfig {
            ayanamsha: Ayanamsha::Tropical,
            ..CalendarConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_long_lookahead() {
        let cfg = CalendarConfig {
            tropical_lookahead_days: 40.0,
            ..CalendarConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: CalendarConfig =
            serde_json::from_str(r#"{"ayanamsha": "raman", "hour_format": "hh_mm_ss"}"#).unwrap();
        assert_eq!(cfg.ayanamsha, Ayanamsha::Raman);
        assert_eq!(cfg.hour_format, HourFormat::HhMmSs);
        assert_eq!(cfg.tropical_lookahead_days, 15.0);
        assert_eq!(cfg.search, SearchConfig::default());
    }
}
