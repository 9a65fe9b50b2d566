//! Detected transitions and the season vocabulary.

use std::fmt;

use helios_time::Instant;

/// A detected value transition of a scalar event function.
///
/// The instant is precise to the tolerance the finder was configured
/// with; the values are the coarse-scan samples on either side of the
/// refined bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// When the transition happens.
    pub instant: Instant,
    /// Function value on the early side.
    pub old_value: u8,
    /// Function value on the late side.
    pub new_value: u8,
}

/// The four seasons as 90° buckets of apparent ecliptic longitude,
/// counted from the vernal equinox.
///
/// Northern-hemisphere naming; the bucket codes are what the season
/// event function emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Longitude 0°–90°.
    Spring,
    /// Longitude 90°–180°.
    Summer,
    /// Longitude 180°–270°.
    Autumn,
    /// Longitude 270°–360°.
    Winter,
}

impl Season {
    /// The season for an event-function code, if the code is in range.
    pub const fn from_code(code: u8) -> Option<Season> {
        match code {
            0 => Some(Season::Spring),
            1 => Some(Season::Summer),
            2 => Some(Season::Autumn),
            3 => Some(Season::Winter),
            _ => None,
        }
    }

    /// The event-function code of this season.
    pub const fn code(&self) -> u8 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
        }
    }

    /// Traditional almanac label of the transition into this season.
    pub const fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Vernal Equinox",
            Season::Summer => "Summer Solstice",
            Season::Autumn => "Autumnal Equinox",
            Season::Winter => "Winter Solstice",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..4u8 {
            let season = Season::from_code(code).unwrap();
            assert_eq!(season.code(), code);
        }
        assert_eq!(Season::from_code(4), None);
    }

    #[test]
    fn labels_follow_the_almanac() {
        assert_eq!(Season::Spring.label(), "Vernal Equinox");
        assert_eq!(Season::Summer.label(), "Summer Solstice");
        assert_eq!(Season::Autumn.label(), "Autumnal Equinox");
        assert_eq!(Season::Winter.label(), "Winter Solstice");
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Season::Spring.to_string(), "spring");
        assert_eq!(Season::Winter.to_string(), "winter");
    }
}
