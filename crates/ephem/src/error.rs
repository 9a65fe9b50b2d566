//! Error types for the helios_ephem crate.

use crate::body::Body;

/// Error type for all fallible operations in the helios_ephem crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EphemerisError {
    /// An instant outside the provider's coverage window.
    ///
    /// Coverage violations are never clamped or extrapolated; the
    /// requested instant and the coverage bounds are reported as raw
    /// Julian dates.
    #[error("instant JD {jd} is outside ephemeris coverage [JD {start}, JD {end})")]
    OutOfRange {
        /// Requested instant.
        jd: f64,
        /// Inclusive coverage start.
        start: f64,
        /// Exclusive coverage end.
        end: f64,
    },

    /// A body pair the provider has no theory for.
    #[error("no ephemeris for pair {origin} -> {target}")]
    UnsupportedPair {
        /// Origin body of the query.
        origin: Body,
        /// Target body of the query.
        target: Body,
    },

    /// Latitude outside the geographic range.
    #[error("latitude {value} out of range [-90, 90] degrees")]
    InvalidLatitude {
        /// Offending value in degrees.
        value: f64,
    },

    /// Longitude outside the geographic range.
    #[error("longitude {value} out of range [-180, 180] degrees")]
    InvalidLongitude {
        /// Offending value in degrees.
        value: f64,
    },

    /// Elevation that is not a finite number.
    #[error("elevation {value} is not a finite number of metres")]
    InvalidElevation {
        /// Offending value in metres.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = EphemerisError::OutOfRange {
            jd: 2_400_000.5,
            start: 2_415_017.5,
            end: 2_488_071.5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("2400000.5"));
        assert!(msg.contains("coverage"));
    }

    #[test]
    fn test_unsupported_pair_display() {
        let err = EphemerisError::UnsupportedPair {
            origin: Body::Earth,
            target: Body::Moon,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("earth -> moon"));
    }

    #[test]
    fn test_invalid_latitude_display() {
        let err = EphemerisError::InvalidLatitude { value: 97.2 };
        let msg = format!("{}", err);
        assert!(msg.contains("97.2"));
        assert!(msg.contains("[-90, 90]"));
    }
}
