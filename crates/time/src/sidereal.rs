//! Earth rotation angle and Greenwich Mean Sidereal Time.
//!
//! Needed to turn right ascension into an hour angle at a given
//! longitude. Instants are UTC-based and stand in for UT1 (see
//! [`crate::scale`] for the size of that approximation).
//!
//! ERA follows IERS Conventions 2010, eq. 5.15; the GMST polynomial is
//! from Capitaine et al. (2003).

use std::f64::consts::{PI, TAU};

use crate::instant::Instant;
use crate::scale::{J2000_JD, julian_centuries_tt};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth rotation angle in radians, normalized to `[0, 2π)`.
pub fn earth_rotation_angle(t: Instant) -> f64 {
    let du = t.jd() - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, normalized to `[0, 2π)`.
///
/// GMST = ERA + polynomial(T), with T in Julian centuries of TT.
pub fn gmst(t: Instant) -> f64 {
    let tc = julian_centuries_tt(t);
    let poly_arcsec = 0.014506
        + tc * (4612.156534
            + tc * (1.3915817 + tc * (-0.00000044 + tc * (-0.000029956 + tc * -0.0000000368))));
    (earth_rotation_angle(t) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time from GMST and an east longitude, radians in `[0, 2π)`.
pub fn local_sidereal_time(gmst_rad: f64, east_longitude_rad: f64) -> f64 {
    (gmst_rad + east_longitude_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn era_at_j2000() {
        // ERA(J2000.0) ≈ 280.46°.
        let deg = earth_rotation_angle(Instant::from_jd(J2000_JD)).to_degrees();
        assert_abs_diff_eq!(deg, 280.46, epsilon = 0.05);
    }

    #[test]
    fn gmst_at_2000_jan_1_midnight() {
        // 2000-01-01 00:00 UT: GMST ≈ 6h 39m 52s ≈ 99.97°.
        let deg = gmst(Instant::from_jd(2_451_544.5)).to_degrees();
        assert_abs_diff_eq!(deg, 99.97, epsilon = 0.05);
    }

    #[test]
    fn sidereal_gains_on_solar_time() {
        // One solar day advances GMST by roughly 0.986° beyond a full turn.
        let g0 = gmst(Instant::from_jd(J2000_JD));
        let g1 = gmst(Instant::from_jd(J2000_JD + 1.0));
        let gain = (g1 - g0).rem_euclid(TAU).to_degrees();
        assert_abs_diff_eq!(gain, 0.9856, epsilon = 0.01);
    }

    #[test]
    fn normalization() {
        for jd in [2_415_020.5, 2_451_544.5, 2_458_484.5, 2_488_069.5] {
            let t = Instant::from_jd(jd);
            assert!((0.0..TAU).contains(&earth_rotation_angle(t)));
            assert!((0.0..TAU).contains(&gmst(t)));
        }
        let lst = local_sidereal_time(6.0, 1.0);
        assert!((0.0..TAU).contains(&lst));
        assert_abs_diff_eq!(local_sidereal_time(6.0, 1.0), 7.0 - TAU, epsilon = 1e-12);
    }
}
