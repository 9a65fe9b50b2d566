//! Half-open time intervals.

use crate::duration::Duration;
use crate::instant::Instant;

/// A half-open time interval `[start, end)`.
///
/// The window is a plain value type; operations that require an ordered
/// window (start strictly before end) check [`TimeWindow::is_ordered`] at
/// their entry point and report the violation through their own error
/// type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: Instant,
    end: Instant,
}

impl TimeWindow {
    /// Creates a window from its bounds.
    pub const fn new(start: Instant, end: Instant) -> Self {
        TimeWindow { start, end }
    }

    /// Inclusive start of the window.
    pub const fn start(&self) -> Instant {
        self.start
    }

    /// Exclusive end of the window.
    pub const fn end(&self) -> Instant {
        self.end
    }

    /// Signed length of the window.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// True when start is strictly before end.
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// True when `t` lies within `[start, end)`.
    pub fn contains(&self, t: Instant) -> bool {
        self.start <= t && t < self.end
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn day(offset: f64) -> Instant {
        Instant::from_jd(2_458_484.5 + offset)
    }

    #[test]
    fn span_and_ordering() {
        let w = TimeWindow::new(day(0.0), day(10.0));
        assert!(w.is_ordered());
        assert_abs_diff_eq!(w.span().days(), 10.0);

        assert!(!TimeWindow::new(day(1.0), day(1.0)).is_ordered());
        assert!(!TimeWindow::new(day(2.0), day(1.0)).is_ordered());
    }

    #[test]
    fn containment_is_half_open() {
        let w = TimeWindow::new(day(0.0), day(1.0));
        assert!(w.contains(day(0.0)));
        assert!(w.contains(day(0.999)));
        assert!(!w.contains(day(1.0)));
        assert!(!w.contains(day(-0.001)));
    }
}
