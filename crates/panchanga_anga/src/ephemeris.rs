//! The ephemeris seam: bodies, locations and the provider trait.
//!
//! The search and calendar layers only ever need two things from an
//! ephemeris: the apparent ecliptic longitude of the Sun or Moon in a given
//! zodiac frame, and the instants of sunrise and sunset at a place.

use serde::{Deserialize, Serialize};

use crate::ayanamsha::Ayanamsha;
use crate::error::EphemerisError;

/// Bodies whose longitudes drive the angas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Approximate local mean noon (JD UT) for the civil date starting at `jd_0h`.
    pub fn approximate_local_noon_jd(&self, jd_0h: f64) -> f64 {
        jd_0h + 0.5 - self.longitude_deg / 360.0
    }
}

/// Solar horizon events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

/// Source of Sun/Moon longitudes and sunrise/sunset instants.
///
/// All instants are Julian Dates in UT.
pub trait EphemerisProvider {
    /// Ecliptic longitude of `body` in degrees [0, 360) in the given frame.
    fn longitude(&self, body: Body, jd_ut: f64, frame: Ayanamsha) -> Result<f64, EphemerisError>;

    /// The `event` nearest to the local noon `jd_local_noon` at `location`.
    ///
    /// `Ok(None)` means the event does not occur that day (polar day/night).
    fn rise_set(
        &self,
        event: RiseSetEvent,
        jd_local_noon: f64,
        location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError>;
}
