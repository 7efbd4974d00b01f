//! Classification of an instant into anga values.

use crate::anga_types::AngaType;
use crate::ayanamsha::Ayanamsha;
use crate::ephemeris::{Body, EphemerisProvider};
use crate::error::EphemerisError;
use crate::search_util::normalize_360;

/// Combined longitude `(w_moon * moon + w_sun * sun) mod 360` of an anga.
pub fn anga_longitude_at(
    provider: &dyn EphemerisProvider,
    anga: AngaType,
    jd_ut: f64,
    frame: Ayanamsha,
) -> Result<f64, EphemerisError> {
    let (w_moon, w_sun) = anga.weights();
    let mut lon = 0.0;
    if w_moon != 0.0 {
        lon += w_moon * provider.longitude(Body::Moon, jd_ut, frame)?;
    }
    if w_sun != 0.0 {
        lon += w_sun * provider.longitude(Body::Sun, jd_ut, frame)?;
    }
    Ok(normalize_360(lon))
}

/// 1-based anga index for a combined longitude.
pub fn anga_index_from_longitude(anga: AngaType, lon_deg: f64) -> u32 {
    let idx = (normalize_360(lon_deg) / anga.arc_deg()).floor() as u32 + 1;
    idx.min(anga.num_angas())
}

/// 1-based anga index holding at `jd_ut`.
pub fn anga_index_at(
    provider: &dyn EphemerisProvider,
    anga: AngaType,
    jd_ut: f64,
    frame: Ayanamsha,
) -> Result<u32, EphemerisError> {
    anga_longitude_at(provider, anga, jd_ut, frame).map(|lon| anga_index_from_longitude(anga, lon))
}

/// Fraction of the current anga already elapsed, in [0, 1).
pub fn anga_elapsed_fraction(anga: AngaType, lon_deg: f64) -> f64 {
    let arc = anga.arc_deg();
    (normalize_360(lon_deg) % arc) / arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_tithi() {
        assert_eq!(anga_index_from_longitude(AngaType::Tithi, 0.0), 1);
        assert_eq!(anga_index_from_longitude(AngaType::Tithi, 11.999), 1);
        assert_eq!(anga_index_from_longitude(AngaType::Tithi, 12.0), 2);
        assert_eq!(anga_index_from_longitude(AngaType::Tithi, 359.9), 30);
    }

    #[test]
    fn nakshatra_hasta() {
        // Hasta spans 160..173.33 deg
        assert_eq!(anga_index_from_longitude(AngaType::Nakshatra, 165.0), 13);
    }

    #[test]
    fn rounding_at_full_circle_clamps() {
        // -1e-15 normalizes to exactly 360.0, one arc past the last sign.
        assert_eq!(anga_index_from_longitude(AngaType::SolarRaashi, -1e-15), 12);
        assert_eq!(anga_index_from_longitude(AngaType::Tithi, -1e-15), 30);
    }

    #[test]
    fn elapsed_fraction() {
        assert!((anga_elapsed_fraction(AngaType::Tithi, 18.0) - 0.5).abs() < 1e-12);
    }
}
