//! Signed elapsed time in fractional days.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scale::SECONDS_PER_DAY;

/// A signed elapsed time, stored as fractional days.
///
/// Durations add to [`Instant`](crate::Instant)s, compare, and scale.
/// They serve both as scan steps and as the event finder's resolution
/// tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Duration(f64);

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Duration = Duration(0.0);

    /// Creates a duration from fractional days.
    pub const fn from_days(days: f64) -> Self {
        Duration(days)
    }

    /// Creates a duration from fractional hours.
    pub fn from_hours(hours: f64) -> Self {
        Duration(hours / 24.0)
    }

    /// Creates a duration from fractional minutes.
    pub fn from_minutes(minutes: f64) -> Self {
        Duration(minutes / 1440.0)
    }

    /// Creates a duration from fractional seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Duration(seconds / SECONDS_PER_DAY)
    }

    /// Length in fractional days.
    pub const fn days(&self) -> f64 {
        self.0
    }

    /// Length in fractional hours.
    pub fn hours(&self) -> f64 {
        self.0 * 24.0
    }

    /// Length in fractional seconds.
    pub fn seconds(&self) -> f64 {
        self.0 * SECONDS_PER_DAY
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Duration(self.0.abs())
    }

    /// True for durations strictly longer than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Duration {
        Duration(self.0 * rhs)
    }
}

impl Div<f64> for Duration {
    type Output = Duration;

    fn div(self, rhs: f64) -> Duration {
        Duration(self.0 / rhs)
    }
}
