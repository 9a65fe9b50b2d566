//! The position-oracle seam.

use helios_time::Instant;

use crate::body::Body;
use crate::error::EphemerisError;
use crate::vector::Vec3;

/// A black-box source of relative body positions.
///
/// Implementations answer "where is `target` as seen from `origin` at
/// instant `t`", in astronomical units, in the true ecliptic frame of
/// date (x toward the equinox of date, z toward the north ecliptic
/// pole). With that frame choice the apparent ecliptic longitude of the
/// target is simply `atan2(v.y, v.x)`.
///
/// Contract:
/// - instants inside the provider's coverage must succeed; instants
///   outside it must fail with [`EphemerisError::OutOfRange`], never
///   clamp or extrapolate;
/// - queries are pure: identical inputs produce identical vectors;
/// - swapping origin and target negates the vector, and `(b, b)` is the
///   zero vector.
pub trait Ephemeris {
    /// Position of `target` relative to `origin` at `t`.
    fn position(&self, origin: Body, target: Body, t: Instant) -> Result<Vec3, EphemerisError>;
}
