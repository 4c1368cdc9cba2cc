/// Locator lengths that are accepted, one per precision
pub const VALID_LENGTHS: [usize; 4] = [2, 4, 6, 8];

/// Length of an encoded locator
pub const ENCODED_LENGTH: usize = 8;

/// Returned by the sentinel encoder when the coordinate cannot be encoded
pub const NOT_APPLICABLE: &str = "    n/a ";

/// Absolute longitude above which encoding is refused
pub const LON_LIMIT: f64 = 180.001;

/// Absolute latitude above which encoding is refused
pub const LAT_LIMIT: f64 = 90.001;

/// Upper clamp for longitude before encoding
pub const LON_CLAMP: f64 = 179.99999;

/// Upper clamp for latitude before encoding
pub const LAT_CLAMP: f64 = 89.99999;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Cell width in degrees of longitude for each tier (field, square, subsquare, extended)
pub const CELL_LON_DEGREES: [f64; 4] = [20.0, 2.0, 5.0 / 60.0, 5.0 / 600.0];

/// Cell height in degrees of latitude for each tier
pub const CELL_LAT_DEGREES: [f64; 4] = [10.0, 1.0, 2.5 / 60.0, 2.5 / 600.0];
