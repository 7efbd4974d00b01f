//! Types for anga classification and span search.

use serde::{Deserialize, Serialize};

/// A discrete calendrical unit derived from Sun/Moon longitudes.
///
/// Every anga divides a combined longitude
/// `(w_moon * moon + w_sun * sun) mod 360` into equal arcs numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngaType {
    /// Lunar day: 30 parts of moon - sun.
    Tithi,
    /// Half tithi: 60 parts of moon - sun.
    Karana,
    /// 27 parts of moon + sun.
    Yoga,
    /// Lunar mansion: 27 parts of the Moon's longitude.
    Nakshatra,
    /// Moon's zodiac sign.
    Raashi,
    /// Sun's nakshatra.
    SolarNakshatra,
    /// Sun's zodiac sign (solar month).
    SolarRaashi,
}

const ALL_ANGAS: [AngaType; 7] = [
    AngaType::Tithi,
    AngaType::Karana,
    AngaType::Yoga,
    AngaType::Nakshatra,
    AngaType::Raashi,
    AngaType::SolarNakshatra,
    AngaType::SolarRaashi,
];

impl AngaType {
    /// Number of distinct values in one cycle.
    pub const fn num_angas(self) -> u32 {
        match self {
            Self::Tithi => 30,
            Self::Karana => 60,
            Self::Yoga | Self::Nakshatra | Self::SolarNakshatra => 27,
            Self::Raashi | Self::SolarRaashi => 12,
        }
    }

    /// Arc covered by one anga in degrees.
    pub fn arc_deg(self) -> f64 {
        360.0 / f64::from(self.num_angas())
    }

    /// `(w_moon, w_sun)` weights of the combined longitude.
    pub const fn weights(self) -> (f64, f64) {
        match self {
            Self::Tithi | Self::Karana => (1.0, -1.0),
            Self::Yoga => (1.0, 1.0),
            Self::Nakshatra | Self::Raashi => (1.0, 0.0),
            Self::SolarNakshatra | Self::SolarRaashi => (0.0, 1.0),
        }
    }

    /// Coarse scan step: about a quarter of the shortest possible anga.
    pub const fn scan_step_days(self) -> f64 {
        match self {
            Self::Tithi | Self::Yoga | Self::Nakshatra => 0.2,
            Self::Karana => 0.1,
            Self::Raashi => 0.5,
            Self::SolarNakshatra => 2.0,
            Self::SolarRaashi => 5.0,
        }
    }

    /// Upper bound on how long one anga value can hold.
    pub const fn max_span_days(self) -> f64 {
        match self {
            Self::Tithi | Self::Yoga | Self::Nakshatra => 1.5,
            Self::Karana => 1.0,
            Self::Raashi => 3.0,
            Self::SolarNakshatra => 15.0,
            Self::SolarRaashi => 32.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Karana => "karana",
            Self::Yoga => "yoga",
            Self::Nakshatra => "nakshatra",
            Self::Raashi => "raashi",
            Self::SolarNakshatra => "solar_nakshatra",
            Self::SolarRaashi => "solar_raashi",
        }
    }

    pub const fn all() -> &'static [AngaType] {
        &ALL_ANGAS
    }
}

/// One contiguous interval during which an anga holds a single value.
///
/// A bound is `None` when it lies outside the searched window. Both bounds
/// `None` means the value never held inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngaSpan {
    pub anga_type: AngaType,
    /// 1-based anga index.
    pub index: u32,
    /// Entry instant (JD UT).
    pub start: Option<f64>,
    /// Exit instant (JD UT).
    pub end: Option<f64>,
}

impl AngaSpan {
    pub fn not_found(anga_type: AngaType, index: u32) -> Self {
        Self {
            anga_type,
            index,
            start: None,
            end: None,
        }
    }

    /// Both bounds known.
    pub fn is_resolved(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// At least one bound known, i.e. the value held somewhere in the window.
    pub fn is_found(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.start?, self.end?))
    }

    /// Whether `jd` falls in the span, treating open bounds as unbounded.
    pub fn contains(&self, jd: f64) -> bool {
        self.is_found()
            && self.start.is_none_or(|s| s <= jd)
            && self.end.is_none_or(|e| jd < e)
    }
}

/// An instant at which an anga changes value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transit {
    pub anga_type: AngaType,
    /// Transit instant (JD UT).
    pub jd: f64,
    pub from_index: u32,
    pub to_index: u32,
}

/// Configuration for boundary refinement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-6, ~0.09 s).
    pub convergence_days: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            convergence_days: 1e-6,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !(self.convergence_days > 0.0) {
            return Err("convergence_days must be positive");
        }
        if self.convergence_days > 1e-4 {
            return Err("convergence_days must not exceed 1e-4");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcs_cover_circle() {
        for anga in AngaType::all() {
            let total = anga.arc_deg() * f64::from(anga.num_angas());
            assert!((total - 360.0).abs() < 1e-9, "{anga:?}");
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let cfg = SearchConfig {
            max_iterations: 0,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_nan_convergence() {
        let cfg = SearchConfig {
            convergence_days: f64::NAN,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_loose_convergence() {
        let cfg = SearchConfig {
            convergence_days: 0.01,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn open_span_contains() {
        let span = AngaSpan {
            anga_type: AngaType::Tithi,
            index: 3,
            start: None,
            end: Some(10.0),
        };
        assert!(span.contains(-100.0));
        assert!(!span.contains(10.0));
        assert!(!span.is_resolved());
        assert!(!AngaSpan::not_found(AngaType::Tithi, 3).contains(0.0));
    }

    #[test]
    fn config_fills_missing_fields_from_default() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_iterations": 20}"#).unwrap();
        assert_eq!(cfg.max_iterations, 20);
        assert_eq!(cfg.convergence_days, 1e-6);
    }
}
