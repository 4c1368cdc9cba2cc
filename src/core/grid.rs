use crate::core::constants::{ENCODED_LENGTH, LAT_CLAMP, LAT_LIMIT, LON_CLAMP, LON_LIMIT};
use crate::core::tiers::{Precision, TIERS, check_locator};
use crate::util::coord::Coordinate;
use crate::util::error::LocatorError;
use geo_types::Point;

/// Rescale factor and divisor for each longitude tier during encoding.
///
/// The last two tiers work in minutes and seconds of the remainder.
const LON_STEPS: [(f64, f64); 4] = [(1.0, 20.0), (1.0, 2.0), (60.0, 5.0), (60.0, 30.0)];

/// Rescale factor and divisor for each latitude tier during encoding.
const LAT_STEPS: [(f64, f64); 4] = [(1.0, 10.0), (1.0, 1.0), (60.0, 2.5), (60.0, 15.0)];

/// Returns the southwest corner of the cell named by `grid`, plus its precision.
pub fn locator_to_corner(grid: &str) -> Result<(Point<f64>, Precision), LocatorError> {
    let precision = check_locator(grid)?;
    Ok((corner_of(grid.as_bytes(), precision), precision))
}

/// Corner computation for a locator already known to be valid at `precision`.
pub(crate) fn corner_of(bytes: &[u8], precision: Precision) -> Point<f64> {
    let mut lon = -180.0;
    let mut lat = -90.0;
    for (i, tier) in TIERS.iter().take(precision.tier_count()).enumerate() {
        lon += f64::from(tier.class.index_of(bytes[i * 2])) * tier.lon_degrees;
        lat += f64::from(tier.class.index_of(bytes[i * 2 + 1])) * tier.lat_degrees;
    }
    Point::new(lon, lat)
}

/// Converts a locator to the center of its finest cell.
///
/// Returns a `Point` with x = longitude and y = latitude.
pub fn locator_to_point(grid: &str) -> Result<Point<f64>, LocatorError> {
    let (corner, precision) = locator_to_corner(grid)?;
    let (width, height) = precision.cell_size();

    Ok(Point::new(corner.x() + width / 2.0, corner.y() + height / 2.0))
}

/// Encodes a WGS84 coordinate as an 8-character locator.
///
/// Coordinates more than 0.001° beyond the poles or the antimeridian (or NaN)
/// are rejected. Values at the upper edges are clamped so the top tier never
/// overflows its alphabet.
pub fn point_to_locator<C: Coordinate>(coord: &C) -> Result<String, LocatorError> {
    let lon = coord.lon();
    let lat = coord.lat();

    if !(lon.abs() <= LON_LIMIT && lat.abs() <= LAT_LIMIT) {
        return Err(LocatorError::OutOfRange { lat, lon });
    }

    let lon_indices = encode_axis(lon.min(LON_CLAMP) + 180.0, &LON_STEPS);
    let lat_indices = encode_axis(lat.min(LAT_CLAMP) + 90.0, &LAT_STEPS);

    let mut locator = String::with_capacity(ENCODED_LENGTH);
    for (i, tier) in TIERS.iter().enumerate() {
        locator.push(tier.class.symbol(lon_indices[i]));
        locator.push(tier.class.symbol(lat_indices[i]));
    }

    Ok(locator)
}

fn encode_axis(mut remaining: f64, steps: &[(f64, f64); 4]) -> [u8; 4] {
    let mut indices = [0u8; 4];

    for (i, (&(scale, width), tier)) in steps.iter().zip(TIERS.iter()).enumerate() {
        remaining *= scale;
        // Guards against float residue pushing the index out of the alphabet.
        let index = ((remaining / width) as i64).clamp(0, i64::from(tier.class.max_index()));
        indices[i] = index as u8;
        remaining -= index as f64 * width;
    }

    indices
}
