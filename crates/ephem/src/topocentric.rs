//! Topocentric place: from oracle vectors to a local altitude.
//!
//! The chain is: oracle vector (ecliptic of date) minus the observer's
//! geocentric site vector, rotated into the equatorial frame of date,
//! split into right ascension and declination, then through the local
//! hour angle to an altitude above the horizon.

use helios_time::{Instant, sidereal};

use crate::body::Body;
use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::observer::Observer;
use crate::solar::true_obliquity_rad;
use crate::vector::Vec3;

/// Mean Earth radius, km. A spherical Earth is adequate here: the whole
/// topocentric correction for the sun subtends under 9 arcsec.
const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// Astronomical unit, km.
const AU_KM: f64 = 149_597_870.7;

/// Geocentric position of the observer site in the ecliptic frame of
/// date, AU.
pub fn observer_geocentric(observer: &Observer, t: Instant) -> Vec3 {
    let r_au = (EARTH_RADIUS_KM + observer.elevation_m() / 1000.0) / AU_KM;
    let lat = observer.latitude_rad();
    let lst = sidereal::local_sidereal_time(sidereal::gmst(t), observer.longitude_rad());
    let equatorial = Vec3::new(
        r_au * lat.cos() * lst.cos(),
        r_au * lat.cos() * lst.sin(),
        r_au * lat.sin(),
    );
    equatorial_to_ecliptic(equatorial, true_obliquity_rad(t))
}

/// Apparent altitude of `target` above the observer's horizon, degrees.
///
/// Topocentric (the site vector is subtracted from the oracle vector)
/// and unrefracted; thresholds that fold in mean refraction, like the
/// −0.8333° sunrise standard, are the caller's business. `target` must
/// be a body other than the observer's own.
pub fn apparent_altitude_deg<E: Ephemeris>(
    ephemeris: &E,
    observer: &Observer,
    target: Body,
    t: Instant,
) -> Result<f64, EphemerisError> {
    let geocentric = ephemeris.position(observer.body(), target, t)?;
    let topocentric = geocentric - observer_geocentric(observer, t);

    let equatorial = ecliptic_to_equatorial(topocentric, true_obliquity_rad(t));
    let right_ascension = equatorial.y.atan2(equatorial.x);
    let declination = equatorial
        .z
        .atan2((equatorial.x * equatorial.x + equatorial.y * equatorial.y).sqrt());

    let lst = sidereal::local_sidereal_time(sidereal::gmst(t), observer.longitude_rad());
    let hour_angle = lst - right_ascension;

    let lat = observer.latitude_rad();
    let sin_alt =
        lat.sin() * declination.sin() + lat.cos() * declination.cos() * hour_angle.cos();
    Ok(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
}

fn ecliptic_to_equatorial(v: Vec3, obliquity_rad: f64) -> Vec3 {
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    Vec3::new(v.x, v.y * cos_e - v.z * sin_e, v.y * sin_e + v.z * cos_e)
}

fn equatorial_to_ecliptic(v: Vec3, obliquity_rad: f64) -> Vec3 {
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    Vec3::new(v.x, v.y * cos_e + v.z * sin_e, -v.y * sin_e + v.z * cos_e)
}
