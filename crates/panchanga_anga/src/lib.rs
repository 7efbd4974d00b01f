//! Anga classification and span search over a pluggable Sun/Moon ephemeris.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] seam and a mean-motion reference model
//! - Tropical and sidereal zodiac frames
//! - Anga indices (tithi, karana, yoga, nakshatra, signs) at an instant
//! - [`AngaSpanFinder`]: entry/exit search, transits and span coincidence

pub mod anga;
pub mod anga_types;
pub mod ayanamsha;
pub mod ephemeris;
pub mod error;
pub mod mean_motion;
pub mod names;
pub mod overlap;
pub mod search_util;
pub mod span;

pub use anga::{anga_elapsed_fraction, anga_index_at, anga_index_from_longitude, anga_longitude_at};
pub use anga_types::{AngaSpan, AngaType, SearchConfig, Transit};
pub use ayanamsha::Ayanamsha;
pub use ephemeris::{Body, EphemerisProvider, GeoLocation, RiseSetEvent};
pub use error::{AngaError, EphemerisError};
pub use mean_motion::MeanMotionEphemeris;
pub use overlap::{conjunction_window, overlap_days};
pub use span::{AngaSpanFinder, find_anga_span, next_sign_transit};
