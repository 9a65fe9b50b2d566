//! Error types for the helios_time crate.

/// Error type for all fallible operations in the helios_time crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimeError {
    /// A civil date that the proleptic Gregorian calendar cannot represent.
    #[error("invalid or unrepresentable civil date {year:04}-{month:02}-{day:02}")]
    UnrepresentableDate {
        /// Requested year.
        year: i32,
        /// Requested month (1-12).
        month: u32,
        /// Requested day of month (1-31).
        day: u32,
    },

    /// A wall-clock time outside the 24-hour clock.
    #[error("invalid clock time {hour:02}:{minute:02}:{second:02}")]
    InvalidClockTime {
        /// Requested hour.
        hour: u32,
        /// Requested minute.
        minute: u32,
        /// Requested second.
        second: u32,
    },

    /// A local civil time erased by a timezone offset change.
    ///
    /// Ordinary daylight-saving gaps resolve to the first valid instant
    /// after the gap; this error is reserved for local days removed
    /// entirely, such as a date-line realignment.
    #[error("local time {local} does not exist in timezone {timezone}")]
    NonexistentLocalTime {
        /// The requested local wall-clock time.
        local: String,
        /// The IANA timezone name.
        timezone: String,
    },

    /// An instant too far from the civil epoch to express as a timestamp.
    #[error("instant JD {jd} cannot be represented as a civil timestamp")]
    UnrepresentableInstant {
        /// The offending Julian date.
        jd: f64,
    },
}
