pub mod constants;
pub mod distance;
pub mod geometry;
pub mod grid;
pub mod tiers;

pub use constants::{
    CELL_LAT_DEGREES, CELL_LON_DEGREES, EARTH_RADIUS_KM, ENCODED_LENGTH, NOT_APPLICABLE,
    VALID_LENGTHS,
};
pub use distance::{haversine_km, haversine_km_truncated};
pub use geometry::{create_cell_polygon, create_cell_rect};
pub use grid::{locator_to_corner, locator_to_point, point_to_locator};
pub use tiers::{CharClass, Precision, TIERS, Tier, check_locator, is_valid};
