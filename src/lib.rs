//! # maidenhead-rs
//!
//! Maidenhead grid-square locators: validate, decode, encode, and measure
//! distances from a home square. There are currently four main entry points.
//!
//! ### 1. Sentinel functions
//!
//! Never fail; invalid input yields `(0.0, 0.0)`, `"    n/a "` or `0`.
//!
//! ```
//! use maidenhead_rs::{decode, encode, validate};
//!
//! assert!(validate("JN58td"));
//! let (lat, lon) = decode("JN58TD");
//! assert_eq!(&encode(lat, lon)[..6], "JN58TD");
//! assert_eq!(decode("invalid"), (0.0, 0.0));
//! ```
//!
//! ### 2. `GridSquare` - Typed squares
//!
//! ```
//! use maidenhead_rs::{GridSquare, Precision};
//!
//! # fn main() -> Result<(), maidenhead_rs::LocatorError> {
//! let square = GridSquare::from_wgs84(&(11.625, 48.146), Precision::Subsquare)?;
//! println!("{}", square);
//! let polygon = square.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `HomeLocation` - Distances
//!
//! ```
//! use maidenhead_rs::HomeLocation;
//!
//! # fn main() -> Result<(), maidenhead_rs::LocatorError> {
//! let home = HomeLocation::from_grid("JN58TD")?;
//! assert_eq!(home.distance_km("JN57TD"), 111);
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvToGrid` - CSV annotation
//!
//! ```no_run
//! use maidenhead_rs::{CsvGridConfig, CsvToGrid, HomeLocation, Precision};
//!
//! # fn main() -> Result<(), maidenhead_rs::LocatorError> {
//! let config = CsvGridConfig::from_coords("lon", "lat")
//!     .precision(Precision::Square)
//!     .with_home(HomeLocation::from_grid("JN58TD")?);
//!
//! "spots.csv".to_grid_csv("spots_grid.csv", &config)?;
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use crate::api::{
    CoordinateSource, CsvGridConfig, CsvToGrid, GeometryFormat, GridSquare, HomeLocation,
    SharedHome, csv_to_grid_csv, decode, encode, validate,
};
pub use crate::core::{
    CELL_LAT_DEGREES, CELL_LON_DEGREES, EARTH_RADIUS_KM, ENCODED_LENGTH, NOT_APPLICABLE,
    Precision, VALID_LENGTHS, check_locator, haversine_km, locator_to_point, point_to_locator,
};
pub use crate::util::{Coordinate, LocatorError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), LocatorError> {
        let mut home = HomeLocation::new();
        home.set("JN58TD");

        let pt = point! { x: 11.625, y: 47.146 };
        let square = GridSquare::from_wgs84(&pt, Precision::Subsquare)?;
        assert_eq!(square.as_str(), "JN57TD");
        assert!(square.contains(&pt));

        assert_eq!(home.distance_to_square_km(&square), 111);
        assert_eq!(home.distance_km(square.as_str()), 111);
        Ok(())
    }

    #[test]
    fn test_every_valid_length_decodes() {
        for grid in ["JN", "JN58", "JN58TD", "JN58TD42"] {
            assert!(VALID_LENGTHS.contains(&grid.len()));
            assert!(validate(grid));
            assert_ne!(decode(grid), (0.0, 0.0));
        }
    }

    #[test]
    fn test_sentinel_and_strict_agree() -> Result<(), LocatorError> {
        let (lat, lon) = decode("FN31PR");
        let center = locator_to_point("FN31PR")?;
        assert_eq!((lat, lon), (center.y(), center.x()));

        assert_eq!(encode(lat, lon), point_to_locator(&center)?);
        assert_eq!(check_locator("FN31PR")?, Precision::Subsquare);
        Ok(())
    }

    #[test]
    fn test_exhaustive_square_round_trip() {
        // Every 4-character square, extended with a fixed subsquare and digits.
        for field_lon in b'A'..=b'R' {
            for field_lat in b'A'..=b'R' {
                for digit_lon in b'0'..=b'9' {
                    for digit_lat in b'0'..=b'9' {
                        let grid: String =
                            [field_lon, field_lat, digit_lon, digit_lat, b'K', b'L', b'4', b'7']
                                .iter()
                                .map(|&b| b as char)
                                .collect();
                        let (lat, lon) = decode(&grid);
                        assert_eq!(encode(lat, lon), grid);
                    }
                }
            }
        }
    }

    #[test]
    fn test_far_out_of_range_is_not_applicable() {
        assert_eq!(encode(95.0, 9.0), NOT_APPLICABLE);
        assert_eq!(ENCODED_LENGTH, NOT_APPLICABLE.len());
    }

    #[test]
    fn test_haversine_matches_earth_radius() {
        let quarter = haversine_km((0.0, 0.0), (std::f64::consts::FRAC_PI_2, 0.0));
        assert!((quarter - EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(CELL_LON_DEGREES[0], 2.0 * CELL_LAT_DEGREES[0]);
    }
}
