//! Integration tests: the daily polar sampler across civil years.

use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use helios_almanac::{AlmanacError, sample_year};
use helios_ephem::{Body, EphemerisError, Observer, SolarEphemeris};
use helios_time::Tz;

fn boston() -> Observer {
    Observer::new(42.36, -71.06, 10.0).unwrap()
}

/// A common year yields 365 samples, a leap year 366, both strictly
/// increasing in time.
#[test]
fn sample_counts_match_the_civil_year() {
    let eph = SolarEphemeris::new();
    let tz: Tz = "UTC".parse().unwrap();

    let y2019 = sample_year(&eph, &boston(), Body::Sun, tz, 2019).unwrap();
    assert_eq!(y2019.len(), 365);
    for pair in y2019.windows(2) {
        assert!(pair[0].instant < pair[1].instant);
    }

    let y2020 = sample_year(&eph, &boston(), Body::Sun, tz, 2020).unwrap();
    assert_eq!(y2020.len(), 366);
}

/// Every sample stays inside the annual envelope: radius within the
/// orbit's bounds, angle in the principal interval.
#[test]
fn samples_stay_in_range() {
    let eph = SolarEphemeris::new();
    let tz: Tz = "America/New_York".parse().unwrap();

    let samples = sample_year(&eph, &boston(), Body::Sun, tz, 2019).unwrap();
    for s in &samples {
        assert!(
            s.radius > 0.9 && s.radius < 1.1,
            "radius {} out of range",
            s.radius
        );
        assert!(
            s.angle > -PI && s.angle <= PI,
            "angle {} out of range",
            s.angle
        );
    }
}

/// The angle track winds once around the origin over the year.
#[test]
fn angles_wind_once_per_year() {
    let eph = SolarEphemeris::new();
    let tz: Tz = "UTC".parse().unwrap();

    let samples = sample_year(&eph, &boston(), Body::Sun, tz, 2019).unwrap();
    let mut winding = 0.0;
    for pair in samples.windows(2) {
        let mut d = pair[1].angle - pair[0].angle;
        if d <= -PI {
            d += TAU;
        } else if d > PI {
            d -= TAU;
        }
        winding += d;
    }
    // 365 days at ~0.9856°/day: just short of one full turn.
    assert!(winding > 6.0 && winding < 6.5, "winding {winding}");
}

/// First sample of 2019: the sun near perihelion, ~80° short of the
/// vernal direction.
#[test]
fn new_year_sample_matches_the_winter_sun() {
    let eph = SolarEphemeris::new();
    let tz: Tz = "UTC".parse().unwrap();

    let samples = sample_year(&eph, &boston(), Body::Sun, tz, 2019).unwrap();
    let first = &samples[0];
    assert_abs_diff_eq!(first.radius, 0.9833, epsilon = 5e-4);
    assert!(
        first.angle > -1.45 && first.angle < -1.33,
        "angle {}",
        first.angle
    );
}

/// The first year of the oracle's validity range samples cleanly east
/// of Greenwich, where every local midnight lands on the previous UTC
/// day.
#[test]
fn first_covered_year_samples_east_of_greenwich() {
    let eph = SolarEphemeris::new();
    let tokyo = Observer::new(35.68, 139.69, 40.0).unwrap();
    let tz: Tz = "Asia/Tokyo".parse().unwrap();

    let samples = sample_year(&eph, &tokyo, Body::Sun, tz, 1900).unwrap();
    assert_eq!(samples.len(), 365);
}

/// A year outside the oracle's coverage is an error, not a short track.
#[test]
fn out_of_coverage_year_is_an_error() {
    let eph = SolarEphemeris::new();
    let tz: Tz = "UTC".parse().unwrap();

    let err = sample_year(&eph, &boston(), Body::Sun, tz, 1850).unwrap_err();
    assert!(matches!(
        err,
        AlmanacError::Ephemeris(EphemerisError::OutOfRange { .. })
    ));
}
