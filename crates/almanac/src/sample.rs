//! Daily polar sampling of a body's topocentric position.

use std::f64::consts::{PI, TAU};

use helios_ephem::{Body, Ephemeris, Observer, Vec3, topocentric};
use helios_time::{Instant, Tz, civil};

use crate::error::AlmanacError;

/// One daily position sample in the observer's ecliptic polar frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Sample instant, the observer's local civil midnight.
    pub instant: Instant,
    /// Topocentric distance to the target in AU.
    pub radius: f64,
    /// Topocentric ecliptic longitude in radians, in `(-pi, pi]`.
    pub angle: f64,
}

/// Samples `target`'s topocentric polar position at every local civil
/// midnight of `year` in `tz`, in order.
///
/// Yields one sample per calendar day: 365 entries for a common year,
/// 366 for a leap year. On a day whose midnight does not exist because
/// a DST transition skips it, the sample is taken at the first valid
/// local instant after the gap.
///
/// # Errors
///
/// Fails if the civil year cannot be mapped to instants, or if the
/// ephemeris rejects a query (e.g. the year lies outside its coverage
/// window); in the latter case the samples are discarded.
pub fn sample_year<E: Ephemeris>(
    ephemeris: &E,
    observer: &Observer,
    target: Body,
    tz: Tz,
    year: i32,
) -> Result<Vec<PositionSample>, AlmanacError> {
    let midnights = civil::year_midnights(tz, year)?;
    let mut samples = Vec::with_capacity(midnights.len());
    for t in midnights {
        let v = ephemeris.position(observer.body(), target, t)?
            - topocentric::observer_geocentric(observer, t);
        samples.push(PositionSample {
            instant: t,
            radius: v.norm(),
            angle: polar_angle(&v),
        });
    }
    Ok(samples)
}

/// Projected ecliptic longitude of `v` in `(-pi, pi]`.
fn polar_angle(v: &Vec3) -> f64 {
    let mut angle = v.y.atan2(v.x);
    // atan2 returns -pi for negative-zero y; fold it onto +pi.
    if angle <= -PI {
        angle += TAU;
    }
    angle
}
