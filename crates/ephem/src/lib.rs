//! Position oracle for the helios workspace.
//!
//! Everything downstream asks one question: where is body B relative to
//! body A at instant t? The [`Ephemeris`] trait is that seam; the
//! shipped implementation is [`SolarEphemeris`], an analytic Earth–Sun
//! theory with an explicit coverage window. On top of the oracle,
//! [`topocentric`] turns vectors into what a ground site actually sees:
//! the target's apparent altitude above the local horizon.
//!
//! All vectors are in astronomical units in the true ecliptic frame of
//! date, so a target's apparent ecliptic longitude is `atan2(v.y, v.x)`.
//!
//! # Quick start
//!
//! ```ignore
//! use helios_ephem::{Body, Ephemeris, Observer, SolarEphemeris, topocentric};
//! use helios_time::Instant;
//!
//! let eph = SolarEphemeris::new();
//! let site = Observer::new(42.36, -71.06, 10.0)?;
//! let t = Instant::from_ymd_hms(2019, 6, 21, 16, 45, 0)?;
//! let sun = eph.position(Body::Earth, Body::Sun, t)?;
//! let altitude = topocentric::apparent_altitude_deg(&eph, &site, Body::Sun, t)?;
//! ```

mod body;
mod ephemeris;
mod error;
mod observer;
mod solar;
pub mod topocentric;
mod vector;

pub use body::Body;
pub use ephemeris::Ephemeris;
pub use error::EphemerisError;
pub use observer::Observer;
pub use solar::SolarEphemeris;
pub use vector::Vec3;
