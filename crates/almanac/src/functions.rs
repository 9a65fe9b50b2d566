//! Scalar event functions over the position oracle.
//!
//! Each constructor closes over an ephemeris and returns a quantized
//! function of time suitable for [`find_events`](crate::find_events):
//! one oracle query plus O(1) arithmetic per evaluation, so the finder
//! can evaluate it freely during refinement.

use std::f64::consts::{FRAC_PI_2, TAU};

use helios_ephem::{Body, Ephemeris, EphemerisError, Observer, topocentric};
use helios_time::Instant;

/// Standard sunrise/sunset altitude threshold in degrees: 34 arcmin of
/// mean horizontal refraction plus the sun's 16 arcmin semidiameter
/// below the geometric horizon.
pub const SUN_HORIZON_DEG: f64 = -0.8333;

/// Boolean day/night indicator: 1 while `target`'s apparent altitude at
/// `observer` is at or above `threshold_deg`, else 0.
///
/// Pass [`SUN_HORIZON_DEG`] for the standard sunrise/sunset definition;
/// other thresholds give twilight variants (e.g. −6° for civil
/// twilight).
pub fn daylight<'a, E: Ephemeris>(
    ephemeris: &'a E,
    observer: &'a Observer,
    target: Body,
    threshold_deg: f64,
) -> impl Fn(Instant) -> Result<u8, EphemerisError> + 'a {
    move |t| {
        let altitude = topocentric::apparent_altitude_deg(ephemeris, observer, target, t)?;
        Ok(u8::from(altitude >= threshold_deg))
    }
}

/// Season quadrant of `target`'s apparent ecliptic longitude as seen
/// from `observer_body`: 0 from the vernal equinox, 1 from the June
/// solstice, 2 from the autumnal equinox, 3 from the December solstice.
///
/// The value is constant inside each 90° bucket and steps exactly at
/// the quadrant boundaries, so its transitions are the equinoxes and
/// solstices.
pub fn season<'a, E: Ephemeris>(
    ephemeris: &'a E,
    observer_body: Body,
    target: Body,
) -> impl Fn(Instant) -> Result<u8, EphemerisError> + 'a {
    move |t| {
        let v = ephemeris.position(observer_body, target, t)?;
        let lambda = v.y.atan2(v.x).rem_euclid(TAU);
        // rem_euclid can land exactly on TAU for tiny negative inputs,
        // hence the wrap.
        Ok((lambda / FRAC_PI_2) as u8 % 4)
    }
}
