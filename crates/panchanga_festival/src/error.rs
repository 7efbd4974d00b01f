//! Error types for festival assignment.

use panchanga_anga::AngaError;
use panchanga_calendar::CalendarError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FestivalError {
    #[error("invalid festival config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Anga(#[from] AngaError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
