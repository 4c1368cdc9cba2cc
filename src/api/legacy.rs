//! Sentinel-returning locator functions.
//!
//! These never fail. Invalid input is replaced by a fixed value so display code
//! can call them unconditionally. Callers that must tell "invalid" apart from
//! a genuine zero should validate first or use the `Result`-returning
//! functions in [`crate::core`].

use crate::core::constants::NOT_APPLICABLE;
use crate::core::grid::{locator_to_point, point_to_locator};
use crate::core::tiers::is_valid;
use log::debug;

/// Returns true when `grid` is a well-formed locator of length 2, 4, 6 or 8.
///
/// ```
/// use maidenhead_rs::validate;
///
/// assert!(validate("JN58td"));
/// assert!(!validate("JNXX"));
/// ```
pub fn validate(grid: &str) -> bool {
    is_valid(grid)
}

/// Decodes a locator to the `(latitude, longitude)` of its cell center.
///
/// Returns `(0.0, 0.0)` when the locator is invalid.
pub fn decode(grid: &str) -> (f64, f64) {
    match locator_to_point(grid) {
        Ok(center) => (center.y(), center.x()),
        Err(e) => {
            debug!("Cannot decode locator '{}': {}", grid, e);
            (0.0, 0.0)
        }
    }
}

/// Encodes `(latitude, longitude)` as an 8-character locator.
///
/// Returns `"    n/a "` when the coordinate is out of range.
///
/// ```
/// use maidenhead_rs::encode;
///
/// assert_eq!(&encode(48.146, 11.625)[..6], "JN58TD");
/// assert_eq!(encode(95.0, 9.0), "    n/a ");
/// ```
pub fn encode(lat: f64, lon: f64) -> String {
    point_to_locator(&(lon, lat)).unwrap_or_else(|e| {
        debug!("Cannot encode coordinate: {}", e);
        NOT_APPLICABLE.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate("JN58TD"));
        assert!(validate("JN58td"));
        assert!(validate("AA00AA00"));
        assert!(validate("JN"));
        assert!(!validate("1234"));
        assert!(!validate("JN585D"));
        assert!(!validate("JNXX"));
    }

    #[test]
    fn test_decode_center() {
        let (lat, lon) = decode("JN58TD");
        assert!((lat - 48.1458333).abs() < 1e-6);
        assert!((lon - 11.625).abs() < 1e-6);
    }

    #[test]
    fn test_decode_invalid_is_origin() {
        assert_eq!(decode("invalid"), (0.0, 0.0));
        assert_eq!(decode(""), (0.0, 0.0));
    }

    #[test]
    fn test_encode() {
        let grid = encode(48.146, 11.625);
        assert_eq!(grid.len(), 8);
        assert!(grid.starts_with("JN58TD"));
    }

    #[test]
    fn test_encode_sentinel() {
        assert_eq!(encode(95.0, 9.0), NOT_APPLICABLE);
        assert_eq!(encode(0.0, 200.0), NOT_APPLICABLE);
        assert_eq!(encode(f64::NAN, 0.0), NOT_APPLICABLE);
        assert_eq!(NOT_APPLICABLE.len(), 8);
        assert!(!validate(NOT_APPLICABLE));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        for grid in ["JN58TD42", "FN31PR21", "ra00aa00"] {
            let (lat, lon) = decode(grid);
            assert_eq!(encode(lat, lon), grid.to_ascii_uppercase());
        }
    }
}
