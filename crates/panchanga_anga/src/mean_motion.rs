//! Mean-motion Sun/Moon ephemeris.
//!
//! Both bodies move uniformly in tropical longitude and every day has the
//! same length, centred on local mean noon. Accuracy is far too low for real
//! almanacs (the true Moon departs from its mean by up to ~6 deg) but the
//! model is exactly invertible, so tests can pin sankrantis, tithis and
//! sunrises to chosen instants.

use panchanga_time::J2000_JD;

use crate::ayanamsha::Ayanamsha;
use crate::ephemeris::{Body, EphemerisProvider, GeoLocation, RiseSetEvent};
use crate::error::EphemerisError;
use crate::search_util::normalize_360;

/// Mean tropical motion of the Sun in degrees per day.
pub const SUN_MEAN_RATE_DEG_PER_DAY: f64 = 0.985_647_36;
/// Mean tropical motion of the Moon in degrees per day.
pub const MOON_MEAN_RATE_DEG_PER_DAY: f64 = 13.176_396_48;

/// Linear Sun/Moon model with a fixed day length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMotionEphemeris {
    epoch_jd: f64,
    sun_tropical_deg: f64,
    moon_tropical_deg: f64,
    sun_rate: f64,
    moon_rate: f64,
    day_length_days: f64,
}

impl Default for MeanMotionEphemeris {
    /// Mean longitudes of J2000.0 and a 12-hour day.
    fn default() -> Self {
        Self {
            epoch_jd: J2000_JD,
            sun_tropical_deg: 280.466_46,
            moon_tropical_deg: 218.316_447_7,
            sun_rate: SUN_MEAN_RATE_DEG_PER_DAY,
            moon_rate: MOON_MEAN_RATE_DEG_PER_DAY,
            day_length_days: 0.5,
        }
    }
}

impl MeanMotionEphemeris {
    /// Model whose Sun and Moon sit at the given `frame` longitudes at `epoch_jd`.
    pub fn pinned(epoch_jd: f64, frame: Ayanamsha, sun_deg: f64, moon_deg: f64) -> Self {
        let ayan = frame.mean_deg(epoch_jd);
        Self {
            epoch_jd,
            sun_tropical_deg: normalize_360(sun_deg + ayan),
            moon_tropical_deg: normalize_360(moon_deg + ayan),
            ..Self::default()
        }
    }

    /// Sunrise-to-sunset duration. Values outside (0, 1) model polar night or day.
    pub fn with_day_length(mut self, days: f64) -> Self {
        self.day_length_days = days;
        self
    }

    pub fn day_length_days(&self) -> f64 {
        self.day_length_days
    }

    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> f64 {
        let dt = jd_ut - self.epoch_jd;
        match body {
            Body::Sun => self.sun_tropical_deg + self.sun_rate * dt,
            Body::Moon => self.moon_tropical_deg + self.moon_rate * dt,
        }
    }
}

impl EphemerisProvider for MeanMotionEphemeris {
    fn longitude(&self, body: Body, jd_ut: f64, frame: Ayanamsha) -> Result<f64, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::OutOfRange { jd: jd_ut });
        }
        Ok(normalize_360(
            self.tropical_longitude(body, jd_ut) - frame.mean_deg(jd_ut),
        ))
    }

    fn rise_set(
        &self,
        event: RiseSetEvent,
        jd_local_noon: f64,
        _location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError> {
        if !(self.day_length_days > 0.0 && self.day_length_days < 1.0) {
            return Ok(None);
        }
        let half = 0.5 * self.day_length_days;
        Ok(Some(match event {
            RiseSetEvent::Sunrise => jd_local_noon - half,
            RiseSetEvent::Sunset => jd_local_noon + half,
        }))
    }
}
