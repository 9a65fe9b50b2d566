//! Timescale constants and the UTC → Terrestrial Time offset.
//!
//! Analytic planetary theories are functions of Terrestrial Time (TT),
//! while every instant in this workspace is UTC-based. The bridge is ΔT,
//! modelled here with the Espenak–Meeus piecewise polynomials covering
//! 1900–2100 (the outermost pieces are extended beyond their fit range so
//! the function is total; accuracy degrades outside the fit years).
//!
//! UT1 is approximated by UTC throughout. The difference is kept under
//! 0.9 s by leap-second scheduling, far below the event tolerances used
//! by this workspace.

use crate::instant::Instant;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// ΔT = TT − UT in seconds at the given instant.
///
/// Espenak & Meeus polynomial expressions, one piece per historical
/// fit interval. Adjacent pieces join within about 0.1 s.
pub fn delta_t_seconds(t: Instant) -> f64 {
    let y = 2000.0 + (t.jd() - J2000_JD) / DAYS_PER_JULIAN_YEAR;

    if y < 1920.0 {
        let u = y - 1900.0;
        -2.79 + 1.494119 * u - 0.0598939 * u * u + 0.0061966 * u.powi(3)
            - 0.000197 * u.powi(4)
    } else if y < 1941.0 {
        let u = y - 1920.0;
        21.20 + 0.84493 * u - 0.076100 * u * u + 0.0020936 * u.powi(3)
    } else if y < 1961.0 {
        let u = y - 1950.0;
        29.07 + 0.407 * u - u * u / 233.0 + u.powi(3) / 2547.0
    } else if y < 1986.0 {
        let u = y - 1975.0;
        45.45 + 1.067 * u - u * u / 260.0 - u.powi(3) / 718.0
    } else if y < 2005.0 {
        let u = y - 2000.0;
        63.86 + 0.3345 * u - 0.060374 * u * u + 0.0017275 * u.powi(3)
            + 0.000651814 * u.powi(4)
            + 0.00002373599 * u.powi(5)
    } else if y < 2050.0 {
        let u = y - 2000.0;
        62.92 + 0.32217 * u + 0.005589 * u * u
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

/// Terrestrial Time Julian date of a UTC-based instant.
pub fn terrestrial_jd(t: Instant) -> f64 {
    t.jd() + delta_t_seconds(t) / SECONDS_PER_DAY
}

/// Julian centuries of Terrestrial Time elapsed since J2000.0.
pub fn julian_centuries_tt(t: Instant) -> f64 {
    (terrestrial_jd(t) - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
