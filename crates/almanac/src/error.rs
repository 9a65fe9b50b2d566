//! Error types for the helios_almanac crate.

use helios_ephem::EphemerisError;
use helios_time::TimeError;

/// Error type for all fallible operations in the helios_almanac crate.
///
/// Oracle and civil-time failures pass through transparently so callers
/// see the original error, not a rewrapped copy.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AlmanacError {
    /// A search window whose start is not strictly before its end.
    #[error("invalid time window: start JD {start} is not before end JD {end}")]
    InvalidWindow {
        /// Window start as a Julian date.
        start: f64,
        /// Window end as a Julian date.
        end: f64,
    },

    /// A coarse scan step that is zero or negative.
    #[error("coarse step must be positive, got {days} days")]
    InvalidStep {
        /// Offending step length in days.
        days: f64,
    },

    /// A refinement tolerance that is zero or negative (bisection could
    /// never terminate).
    #[error("tolerance must be positive, got {days} days")]
    InvalidTolerance {
        /// Offending tolerance in days.
        days: f64,
    },

    /// Civil-calendar conversion error.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Position oracle error, propagated unmodified.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
