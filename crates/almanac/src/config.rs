//! Scan tunables for the event finder.

use helios_time::Duration;

use crate::error::AlmanacError;

/// Tunables for [`find_events`](crate::find_events): the coarse scan
/// step and the bisection tolerance.
///
/// No defaults are provided: a correct step is a property of the event
/// function being scanned (it must undercut the minimum spacing between
/// true transitions, or transitions are silently missed), so the caller
/// chooses both tunables. See the finder's precondition notes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    coarse_step: Duration,
    tolerance: Duration,
}

impl ScanConfig {
    /// Creates a scan configuration.
    pub const fn new(coarse_step: Duration, tolerance: Duration) -> Self {
        ScanConfig {
            coarse_step,
            tolerance,
        }
    }

    /// Spacing of the coarse samples.
    pub const fn coarse_step(&self) -> Duration {
        self.coarse_step
    }

    /// Width at which bracket refinement stops.
    pub const fn tolerance(&self) -> Duration {
        self.tolerance
    }

    /// Validates that both tunables are strictly positive.
    pub fn validate(&self) -> Result<(), AlmanacError> {
        if !self.coarse_step.is_positive() {
            return Err(AlmanacError::InvalidStep {
                days: self.coarse_step.days(),
            });
        }
        if !self.tolerance.is_positive() {
            return Err(AlmanacError::InvalidTolerance {
                days: self.tolerance.days(),
            });
        }
        Ok(())
    }
}
