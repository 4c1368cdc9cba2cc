use geo_types::Point;

/// Trait for types that can provide longitude/latitude in decimal degrees.
///
/// Implemented for `(f64, f64)` tuples ordered `(lon, lat)` and
/// `geo_types::Point<f64>` (x = longitude, y = latitude), so functions can
/// accept either.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn lon(&self) -> f64;
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

/// Converts a degree coordinate to a `(lat, lon)` pair in radians.
pub fn to_radians<C: Coordinate>(coord: &C) -> (f64, f64) {
    (coord.lat().to_radians(), coord.lon().to_radians())
}
