use crate::core::geometry::{create_cell_polygon, create_cell_rect};
use crate::core::grid::{corner_of, point_to_locator};
use crate::core::tiers::{Precision, check_locator};
use crate::util::coord::Coordinate;
use crate::util::error::LocatorError;
use geo_types::{Point, Polygon, Rect};
use geojson::{Feature, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated Maidenhead grid square.
///
/// The locator is stored in upper case, so `"jn58td"` and `"JN58TD"` compare
/// equal once parsed. Serializes as its locator string.
///
/// # Example
///
/// ```
/// use maidenhead_rs::{GridSquare, Precision};
///
/// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
/// let square: GridSquare = "jn58td".parse()?;
/// assert_eq!(square.as_str(), "JN58TD");
/// assert_eq!(square.precision(), Precision::Subsquare);
///
/// let center = square.center();
/// println!("Center: ({}, {})", center.y(), center.x());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridSquare {
    locator: String,
    precision: Precision,
}

impl GridSquare {
    /// Parses and normalizes a locator of length 2, 4, 6 or 8.
    pub fn parse(grid: &str) -> Result<Self, LocatorError> {
        let precision = check_locator(grid)?;
        Ok(Self {
            locator: grid.to_ascii_uppercase(),
            precision,
        })
    }

    /// Returns the square containing a WGS84 (lon/lat) coordinate at the given precision.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::{GridSquare, Precision};
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
    /// // From tuple (lon, lat)
    /// let square = GridSquare::from_wgs84(&(11.625, 48.146), Precision::Subsquare)?;
    /// assert_eq!(square.as_str(), "JN58TD");
    /// // From Point
    /// let square = GridSquare::from_wgs84(&Point::new(11.625, 48.146), Precision::Square)?;
    /// assert_eq!(square.as_str(), "JN58");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, precision: Precision) -> Result<Self, LocatorError> {
        let mut locator = point_to_locator(coord)?;
        locator.truncate(precision.locator_len());
        Ok(Self { locator, precision })
    }

    pub fn as_str(&self) -> &str {
        &self.locator
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Southwest corner of the square (x = longitude, y = latitude).
    pub fn southwest(&self) -> Point<f64> {
        corner_of(self.locator.as_bytes(), self.precision)
    }

    /// Center of the square (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        let corner = self.southwest();
        let (width, height) = self.cell_size();
        Point::new(corner.x() + width / 2.0, corner.y() + height / 2.0)
    }

    /// Size of the square as `(lon_degrees, lat_degrees)`.
    pub fn cell_size(&self) -> (f64, f64) {
        self.precision.cell_size()
    }

    pub fn to_rect(&self) -> Rect<f64> {
        let (width, height) = self.cell_size();
        create_cell_rect(&self.southwest(), width, height)
    }

    /// Converts this square to a rectangular polygon, suitable for spatial
    /// operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let (width, height) = self.cell_size();
        create_cell_polygon(&self.southwest(), width, height)
    }

    /// True when encoding `coord` at this square's precision yields this square.
    ///
    /// Follows the encoder's edge rules: the south and west edges belong to the
    /// square, the north and east edges to the neighbour, except at the poles and
    /// the antimeridian where coordinates are clamped into the last square.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        Self::from_wgs84(coord, self.precision)
            .map(|square| square == *self)
            .unwrap_or(false)
    }

    /// The enclosing square one tier up, or `None` for a field.
    pub fn parent(&self) -> Option<Self> {
        self.precision
            .coarser()
            .and_then(|precision| self.truncate(precision))
    }

    /// The enclosing square at a coarser (or equal) precision.
    ///
    /// Returns `None` when `precision` is finer than this square.
    pub fn truncate(&self, precision: Precision) -> Option<Self> {
        if precision > self.precision {
            return None;
        }
        Some(Self {
            locator: self.locator[..precision.locator_len()].to_string(),
            precision,
        })
    }

    /// Builds a GeoJSON feature with the square polygon and its locator,
    /// precision and center as properties.
    pub fn to_geojson_feature(&self) -> Feature {
        let center = self.center();
        let mut properties = JsonObject::new();
        properties.insert("locator".to_string(), JsonValue::from(self.as_str()));
        properties.insert(
            "precision".to_string(),
            serde_json::to_value(self.precision).unwrap_or(JsonValue::Null),
        );
        properties.insert("center_lat".to_string(), JsonValue::from(center.y()));
        properties.insert("center_lon".to_string(), JsonValue::from(center.x()));

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.to_polygon())),
            id: Some(geojson::feature::Id::String(self.locator.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl fmt::Display for GridSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator)
    }
}

impl FromStr for GridSquare {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GridSquare {
    type Error = LocatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GridSquare> for String {
    fn from(square: GridSquare) -> Self {
        square.locator
    }
}
