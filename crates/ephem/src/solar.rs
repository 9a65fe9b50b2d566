//! Built-in analytic solar provider.
//!
//! Low-precision solar theory (Meeus, *Astronomical Algorithms*, ch. 25):
//! mean longitude and mean anomaly polynomials, the equation of center,
//! the orbit equation for the Earth–Sun distance, and aberration plus
//! nutation-in-longitude corrections for the apparent place. Accuracy is
//! about 0.01° in longitude, i.e. around a quarter hour of event timing,
//! and a few 1e-5 AU in distance.
//!
//! The theory is a function of Terrestrial Time; UTC instants are
//! converted through [`helios_time::scale`]. Coverage is limited to the
//! years 1900–2100 so the ΔT model and the series stay inside their fit
//! range, with a few days of slack on each side: a civil-year scan over a
//! target year touches the neighbouring UTC days (zone offsets span
//! UTC-12 to UTC+14, and the year window ends exactly on the following
//! January 1 local midnight), and those instants must be servable too.

use std::f64::consts::TAU;

use helios_time::{Instant, TimeWindow, scale};

use crate::body::Body;
use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::vector::Vec3;

/// Coverage start, 1899-12-29 00:00 UTC. The slack before 1900-01-01
/// absorbs east-of-Greenwich midnights of the first covered year
/// (UTC+14 puts 1900-01-01 00:00 local at 1899-12-31 10:00 UTC).
const COVERAGE_START_JD: f64 = 2_415_017.5;
/// Coverage end (exclusive), 2100-01-03 00:00 UTC. The slack after
/// 2100-01-01 absorbs west-of-Greenwich ends of the last covered year
/// (UTC-12 puts 2100-01-01 00:00 local at 2100-01-01 12:00 UTC), which
/// a year scan samples exactly.
const COVERAGE_END_JD: f64 = 2_488_071.5;

/// Analytic Earth–Sun position provider.
///
/// Serves the pairs (Earth, Sun) and (Sun, Earth); identical-body pairs
/// yield the zero vector; anything involving the Moon is refused with
/// [`EphemerisError::UnsupportedPair`].
#[derive(Debug, Clone)]
pub struct SolarEphemeris {
    coverage: TimeWindow,
}

impl SolarEphemeris {
    /// Creates a provider covering the full 1900–2100 validity range,
    /// padded so civil-year windows in any zone fit inside it.
    pub fn new() -> Self {
        SolarEphemeris {
            coverage: TimeWindow::new(
                Instant::from_jd(COVERAGE_START_JD),
                Instant::from_jd(COVERAGE_END_JD),
            ),
        }
    }

    /// Creates a provider restricted to a narrower coverage window.
    ///
    /// The theory itself is unchanged; widening beyond 1900–2100 only
    /// degrades accuracy and is not intended.
    pub fn with_coverage(coverage: TimeWindow) -> Self {
        SolarEphemeris { coverage }
    }

    /// The half-open coverage window of this provider.
    pub fn coverage(&self) -> TimeWindow {
        self.coverage
    }
}

impl Default for SolarEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris for SolarEphemeris {
    fn position(&self, origin: Body, target: Body, t: Instant) -> Result<Vec3, EphemerisError> {
        if !self.coverage.contains(t) {
            return Err(EphemerisError::OutOfRange {
                jd: t.jd(),
                start: self.coverage.start().jd(),
                end: self.coverage.end().jd(),
            });
        }
        match (origin, target) {
            (a, b) if a == b => Ok(Vec3::ZERO),
            (Body::Earth, Body::Sun) => Ok(geocentric_sun(t)),
            (Body::Sun, Body::Earth) => Ok(-geocentric_sun(t)),
            (origin, target) => Err(EphemerisError::UnsupportedPair { origin, target }),
        }
    }
}

/// Geocentric sun vector in the true ecliptic frame of date, AU.
///
/// The sun's ecliptic latitude never exceeds 1.2 arcsec and is dropped,
/// so the vector lies exactly in the reference plane.
fn geocentric_sun(t: Instant) -> Vec3 {
    let (lambda, radius) = sun_longitude_radius(t);
    Vec3::new(radius * lambda.cos(), radius * lambda.sin(), 0.0)
}

/// Apparent ecliptic longitude (radians in `[0, 2π)`) and distance (AU).
fn sun_longitude_radius(t: Instant) -> (f64, f64) {
    let tc = scale::julian_centuries_tt(t);

    // Mean longitude, mean anomaly, eccentricity.
    let l0 = 280.46646 + tc * (36_000.76983 + tc * 0.0003032);
    let m = 357.52911 + tc * (35_999.05029 - tc * 0.0001537);
    let e = 0.016708634 - tc * (0.000042037 + tc * 0.0000001267);

    // Equation of center, degrees.
    let m_rad = m.to_radians();
    let c = (1.914602 - tc * (0.004817 + tc * 0.000014)) * m_rad.sin()
        + (0.019993 - 0.000101 * tc) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + c;
    let true_anomaly_rad = (m + c).to_radians();
    let radius = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly_rad.cos());

    // Aberration and nutation in longitude give the apparent place.
    let lambda = true_longitude - 0.00569 - 0.00478 * ascending_node_rad(tc).sin();

    (lambda.to_radians().rem_euclid(TAU), radius)
}

/// True obliquity of the ecliptic in radians (mean value plus the
/// leading nutation term).
pub(crate) fn true_obliquity_rad(t: Instant) -> f64 {
    let tc = scale::julian_centuries_tt(t);
    let mean_arcsec = 84_381.448 - tc * (46.8150 + tc * (0.00059 - tc * 0.001813));
    let mean_deg = mean_arcsec / 3600.0;
    (mean_deg + 0.00256 * ascending_node_rad(tc).cos()).to_radians()
}

/// Longitude of the moon's ascending node, radians (unnormalized).
fn ascending_node_rad(tc: f64) -> f64 {
    (125.04 - 1934.136 * tc).to_radians()
}
