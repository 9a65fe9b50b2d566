//! Absolute points on the canonical time axis.

use std::ops::{Add, Sub};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::duration::Duration;
use crate::error::TimeError;
use crate::scale::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// An absolute point in time, stored as a UTC-based Julian date.
///
/// The Julian date is a continuous fractional day count
/// (JD 2451545.0 = 2000-01-01 12:00 UTC), precise to a few tens of
/// microseconds in the modern era. UTC is treated as a continuous
/// timescale: no leap-second table is applied, which keeps every
/// conversion in this crate below one second of error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant(f64);

impl Instant {
    /// Creates an instant from a raw UTC Julian date.
    pub const fn from_jd(jd: f64) -> Self {
        Instant(jd)
    }

    /// Creates an instant from a UTC timestamp.
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        let unix_seconds =
            utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
        Instant(UNIX_EPOCH_JD + unix_seconds / SECONDS_PER_DAY)
    }

    /// Creates an instant from a civil UTC date and wall-clock time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::UnrepresentableDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(
            TimeError::InvalidClockTime {
                hour,
                minute,
                second,
            },
        )?;
        Ok(Self::from_utc(date.and_time(time).and_utc()))
    }

    /// The raw UTC Julian date.
    pub const fn jd(&self) -> f64 {
        self.0
    }

    /// Converts back to a UTC timestamp, rounded to the microsecond.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        let micros = ((self.0 - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1e6).round();
        if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
            return Err(TimeError::UnrepresentableInstant { jd: self.0 });
        }
        DateTime::from_timestamp_micros(micros as i64)
            .ok_or(TimeError::UnrepresentableInstant { jd: self.0 })
    }

    /// Midpoint between two instants.
    pub fn midpoint(self, other: Self) -> Self {
        Instant(0.5 * (self.0 + other.0))
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Duration {
        Duration::from_days(self.0 - rhs.0)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant(self.0 + rhs.days())
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Duration) -> Instant {
        Instant(self.0 - rhs.days())
    }
}
