//! Celestial body identifiers.

use std::fmt;

/// A celestial body that can appear in a position query.
///
/// The built-in provider serves Earth–Sun geometry only; the Moon is
/// part of the vocabulary so that unsupported queries fail explicitly
/// rather than being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    /// The Sun.
    Sun,
    /// The Earth (the reference body of every [`Observer`](crate::Observer)).
    Earth,
    /// The Moon.
    Moon,
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Body::Sun => "sun",
            Body::Earth => "earth",
            Body::Moon => "moon",
        };
        f.write_str(name)
    }
}
