use crate::core::constants::{CELL_LAT_DEGREES, CELL_LON_DEGREES};
use crate::util::error::LocatorError;
use serde::{Deserialize, Serialize};

/// Character class accepted by one tier of a locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters from `'A'` up to and including `last`, either case.
    Letters { last: u8 },
    /// Digits `'0'..='9'`.
    Digits,
}

impl CharClass {
    pub fn accepts(self, c: u8) -> bool {
        match self {
            CharClass::Letters { last } => (b'A'..=last).contains(&c.to_ascii_uppercase()),
            CharClass::Digits => c.is_ascii_digit(),
        }
    }

    /// Zero-based index of an accepted character.
    pub fn index_of(self, c: u8) -> u8 {
        match self {
            CharClass::Letters { .. } => c.to_ascii_uppercase() - b'A',
            CharClass::Digits => c - b'0',
        }
    }

    /// Largest valid index for this class.
    pub fn max_index(self) -> u8 {
        match self {
            CharClass::Letters { last } => last - b'A',
            CharClass::Digits => 9,
        }
    }

    /// Character for an index; out-of-range indices are clamped.
    pub fn symbol(self, index: u8) -> char {
        let index = index.min(self.max_index());
        match self {
            CharClass::Letters { .. } => (b'A' + index) as char,
            CharClass::Digits => (b'0' + index) as char,
        }
    }
}

/// One two-character tier: a longitude character followed by a latitude character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub class: CharClass,
    pub lon_degrees: f64,
    pub lat_degrees: f64,
}

/// Tiers in locator order, coarsest first.
pub const TIERS: [Tier; 4] = [
    Tier {
        class: CharClass::Letters { last: b'R' },
        lon_degrees: CELL_LON_DEGREES[0],
        lat_degrees: CELL_LAT_DEGREES[0],
    },
    Tier {
        class: CharClass::Digits,
        lon_degrees: CELL_LON_DEGREES[1],
        lat_degrees: CELL_LAT_DEGREES[1],
    },
    Tier {
        class: CharClass::Letters { last: b'X' },
        lon_degrees: CELL_LON_DEGREES[2],
        lat_degrees: CELL_LAT_DEGREES[2],
    },
    Tier {
        class: CharClass::Digits,
        lon_degrees: CELL_LON_DEGREES[3],
        lat_degrees: CELL_LAT_DEGREES[3],
    },
];

/// How many tiers a locator carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// 2 characters, 20° x 10°
    Field,
    /// 4 characters, 2° x 1°
    Square,
    /// 6 characters, 5' x 2.5'
    Subsquare,
    /// 8 characters, 30" x 15"
    Extended,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Field,
        Precision::Square,
        Precision::Subsquare,
        Precision::Extended,
    ];

    pub fn from_len(len: usize) -> Result<Self, LocatorError> {
        match len {
            2 => Ok(Precision::Field),
            4 => Ok(Precision::Square),
            6 => Ok(Precision::Subsquare),
            8 => Ok(Precision::Extended),
            _ => Err(LocatorError::InvalidLength(len)),
        }
    }

    pub fn tier_count(self) -> usize {
        match self {
            Precision::Field => 1,
            Precision::Square => 2,
            Precision::Subsquare => 3,
            Precision::Extended => 4,
        }
    }

    pub fn locator_len(self) -> usize {
        self.tier_count() * 2
    }

    /// Size of the finest cell as `(lon_degrees, lat_degrees)`.
    pub fn cell_size(self) -> (f64, f64) {
        let tier = &TIERS[self.tier_count() - 1];
        (tier.lon_degrees, tier.lat_degrees)
    }

    /// The next coarser precision, or `None` for `Field`.
    pub fn coarser(self) -> Option<Self> {
        match self {
            Precision::Field => None,
            Precision::Square => Some(Precision::Field),
            Precision::Subsquare => Some(Precision::Square),
            Precision::Extended => Some(Precision::Subsquare),
        }
    }
}

/// Checks a locator and returns its precision.
///
/// Only the tiers implied by the length are checked. The first offending
/// character, scanning left to right, is reported.
pub fn check_locator(grid: &str) -> Result<Precision, LocatorError> {
    let bytes = grid.as_bytes();
    let precision = Precision::from_len(bytes.len())?;

    for (tier_idx, tier) in TIERS.iter().take(precision.tier_count()).enumerate() {
        for position in [tier_idx * 2, tier_idx * 2 + 1] {
            if !tier.class.accepts(bytes[position]) {
                let found = grid[position..].chars().next().unwrap_or('\u{FFFD}');
                return Err(LocatorError::InvalidCharacter { position, found });
            }
        }
    }

    Ok(precision)
}

/// Returns true when `grid` is a well-formed locator of length 2, 4, 6 or 8.
pub fn is_valid(grid: &str) -> bool {
    check_locator(grid).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_locators() {
        assert!(is_valid("JN58TD"));
        assert!(is_valid("JN58td"));
        assert!(is_valid("AA00AA00"));
        assert!(is_valid("JN"));
        assert!(is_valid("rr99xx99"));
    }

    #[test]
    fn test_invalid_locators() {
        assert!(!is_valid("1234"));
        assert!(!is_valid("JN585D"));
        assert!(!is_valid("JNXX"));
        assert!(!is_valid(""));
        assert!(!is_valid("JN5"));
        assert!(!is_valid("JN58TD001"));
        assert!(!is_valid("SA"));
        assert!(!is_valid("JN58YA"));
    }

    #[test]
    fn test_only_present_tiers_are_checked() -> Result<(), LocatorError> {
        assert_eq!(check_locator("JN58")?, Precision::Square);
        assert_eq!(check_locator("JN58TD")?, Precision::Subsquare);
        Ok(())
    }

    #[test]
    fn test_invalid_length_error() {
        assert_eq!(check_locator("JN5"), Err(LocatorError::InvalidLength(3)));
        assert_eq!(check_locator("invalid"), Err(LocatorError::InvalidLength(7)));
    }

    #[test]
    fn test_invalid_character_reports_first_position() {
        assert_eq!(
            check_locator("JN585D"),
            Err(LocatorError::InvalidCharacter {
                position: 4,
                found: '5'
            })
        );
        assert_eq!(
            check_locator("1234"),
            Err(LocatorError::InvalidCharacter {
                position: 0,
                found: '1'
            })
        );
    }

    #[test]
    fn test_non_ascii_character() {
        assert_eq!(check_locator("JÑ"), Err(LocatorError::InvalidLength(3)));
        assert_eq!(
            check_locator("JNé"),
            Err(LocatorError::InvalidCharacter {
                position: 2,
                found: 'é'
            })
        );
    }

    #[test]
    fn test_precision_cell_sizes() {
        assert_eq!(Precision::Field.cell_size(), (20.0, 10.0));
        assert_eq!(Precision::Square.cell_size(), (2.0, 1.0));
        assert_eq!(Precision::Extended.locator_len(), 8);
        assert_eq!(Precision::Field.coarser(), None);
        assert_eq!(Precision::Extended.coarser(), Some(Precision::Subsquare));
    }

    #[test]
    fn test_symbol_clamps_index() {
        let letters = TIERS[0].class;
        assert_eq!(letters.symbol(0), 'A');
        assert_eq!(letters.symbol(17), 'R');
        assert_eq!(letters.symbol(30), 'R');
        assert_eq!(TIERS[1].class.symbol(12), '9');
    }
}
