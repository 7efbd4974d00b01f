//! Error types for ephemeris access and anga searches.

use thiserror::Error;

use crate::anga_types::AngaType;

/// Failures reported by an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The epoch is outside the provider's coverage.
    #[error("epoch JD {jd} outside ephemeris coverage")]
    OutOfRange { jd: f64 },
    /// Provider-specific failure.
    #[error("ephemeris provider failure: {0}")]
    Provider(String),
}

/// Errors from anga classification and span search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AngaError {
    /// The requested anga index does not exist for this anga type.
    #[error("{anga:?} index {target} outside 1..={max}")]
    InvalidTarget { anga: AngaType, target: u32, max: u32 },
    /// The search window is empty or reversed.
    #[error("empty search window [{start}, {end}]")]
    InvalidWindow { start: f64, end: f64 },
    /// Search configuration rejected by validation.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
