//! Geographic observer sites.

use crate::body::Body;
use crate::error::EphemerisError;

/// A fixed geographic site on a reference body, immutable once built.
///
/// Latitude is geodetic degrees north, longitude degrees east, elevation
/// metres above sea level. The reference body is always [`Body::Earth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    body: Body,
}

impl Observer {
    /// Creates an observer, validating the coordinate ranges.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
    ) -> Result<Self, EphemerisError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemerisError::InvalidLatitude {
                value: latitude_deg,
            });
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemerisError::InvalidLongitude {
                value: longitude_deg,
            });
        }
        if !elevation_m.is_finite() {
            return Err(EphemerisError::InvalidElevation { value: elevation_m });
        }
        Ok(Observer {
            latitude_deg,
            longitude_deg,
            elevation_m,
            body: Body::Earth,
        })
    }

    /// Geodetic latitude in degrees north.
    pub const fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees east.
    pub const fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Elevation in metres above sea level.
    pub const fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    /// The reference body the site sits on.
    pub const fn body(&self) -> Body {
        self.body
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// East longitude in radians.
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
