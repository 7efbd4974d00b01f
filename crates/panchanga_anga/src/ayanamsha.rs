//! Zodiac frames: tropical and the common sidereal (ayanamsha) systems.
//!
//! A sidereal longitude is the tropical longitude minus the ayanamsha. Each
//! sidereal system is fixed by its J2000.0 value; the epoch value adds the
//! IAU 2006 general precession in longitude.

use panchanga_time::{DAYS_PER_CENTURY, J2000_JD};
use serde::{Deserialize, Serialize};

/// Zodiac frame in which longitudes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsha {
    /// Longitudes measured from the moving vernal equinox.
    Tropical,
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    #[default]
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    Kp,
    /// Fagan-Bradley.
    FaganBradley,
    /// Sri Yukteshwar.
    Yukteshwar,
}

impl Ayanamsha {
    /// Ayanamsha at J2000.0 in degrees (0 for the tropical frame).
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Tropical => 0.0,
            Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Kp => 23.850,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    pub const fn is_sidereal(self) -> bool {
        !matches!(self, Self::Tropical)
    }

    /// Mean ayanamsha in degrees at `jd_ut`.
    pub fn mean_deg(self, jd_ut: f64) -> f64 {
        if !self.is_sidereal() {
            return 0.0;
        }
        let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
        self.reference_j2000_deg() + general_precession_deg(t)
    }
}

/// IAU 2006 general precession in longitude p_A, in degrees.
fn general_precession_deg(t: f64) -> f64 {
    let arcsec = t
        * (5028.796195
            + t * (1.105_434_8 + t * (0.000_079_64 + t * (-0.000_023_857 - t * 0.000_000_038_3))));
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tropical_is_zero() {
        assert_eq!(Ayanamsha::Tropical.mean_deg(2_460_000.5), 0.0);
    }

    #[test]
    fn lahiri_at_j2000() {
        assert!((Ayanamsha::Lahiri.mean_deg(J2000_JD) - 23.853).abs() < 1e-12);
    }

    #[test]
    fn one_century_drift() {
        let d = Ayanamsha::Lahiri.mean_deg(J2000_JD + DAYS_PER_CENTURY)
            - Ayanamsha::Lahiri.mean_deg(J2000_JD);
        assert!((d - 1.397).abs() < 0.01, "one century drift = {d}");
    }
}
