use crate::api::grid_square::GridSquare;
use crate::api::home::HomeLocation;
use crate::core::tiers::Precision;
use crate::geom::parse_geometry;
use crate::util::error::LocatorError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Which input columns hold the location.
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Output format for the grid square polygon column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in WGS84
    GeometryColumn(String),
    /// Separate longitude and latitude columns in decimal degrees
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// Configuration for annotating a CSV file with grid locators.
#[derive(Debug, Clone)]
pub struct CsvGridConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub precision: Precision,
    pub include_cell_geometry: Option<GeometryFormat>,
    /// When set, a `distance_km` column is written.
    pub home: Option<HomeLocation>,
}

impl CsvGridConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::{CsvGridConfig, Precision};
    ///
    /// let config = CsvGridConfig::new("geometry").precision(Precision::Square);
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::GeometryColumn(geometry_column.into()))
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::{CsvGridConfig, HomeLocation};
    ///
    /// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
    /// let config = CsvGridConfig::from_coords("Longitude", "Latitude")
    ///     .with_home(HomeLocation::from_grid("JN58TD")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_coords(lon_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::CoordinateColumns {
            lon_column: lon_column.into(),
            lat_column: lat_column.into(),
        })
    }

    fn with_source(source: CoordinateSource) -> Self {
        Self {
            source,
            exclude_columns: Vec::new(),
            precision: Precision::Subsquare,
            include_cell_geometry: None,
            home: None,
        }
    }

    /// Locator precision written to the output, `Subsquare` by default.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the grid square polygon in output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }

    /// Add a `distance_km` column measured from `home`.
    pub fn with_home(mut self, home: HomeLocation) -> Self {
        self.home = Some(home);
        self
    }
}

pub trait CsvToGrid {
    fn to_grid_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGridConfig,
    ) -> Result<(), LocatorError>;
}

impl<P: AsRef<Path>> CsvToGrid for P {
    fn to_grid_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGridConfig,
    ) -> Result<(), LocatorError> {
        csv_to_grid_csv(self, output_path, config)
    }
}

fn csv_error(e: impl ToString) -> LocatorError {
    LocatorError::CsvError(e.to_string())
}

/// Collects the representative points of a geometry.
///
/// Points and line vertices are used as-is; areas contribute their centroid.
fn geometry_points(geom: Geometry<f64>, points: &mut Vec<Point<f64>>) {
    match geom {
        Geometry::Point(pt) => points.push(pt),
        Geometry::MultiPoint(mp) => points.extend(mp.0),
        Geometry::Line(line) => {
            points.push(line.start_point());
            points.push(line.end_point());
        }
        Geometry::LineString(line) => points.extend(line.points()),
        Geometry::MultiLineString(mls) => {
            for line in mls.0 {
                points.extend(line.points());
            }
        }
        Geometry::Polygon(poly) => points.extend(poly.centroid()),
        Geometry::MultiPolygon(mp) => {
            for poly in mp.0 {
                points.extend(poly.centroid());
            }
        }
        Geometry::Rect(rect) => points.push(rect.centroid()),
        Geometry::Triangle(tri) => points.push(tri.centroid()),
        Geometry::GeometryCollection(gc) => {
            for g in gc.0 {
                geometry_points(g, points);
            }
        }
    }
}

fn points_to_squares(
    points: &[Point<f64>],
    precision: Precision,
) -> Result<Vec<GridSquare>, LocatorError> {
    let mut squares = points
        .iter()
        .map(|pt| GridSquare::from_wgs84(pt, precision))
        .collect::<Result<Vec<_>, _>>()?;
    squares.dedup();
    Ok(squares)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, LocatorError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| csv_error(format!("Column '{}' not found", name)))
}

fn parse_degrees(record: &csv::StringRecord, idx: usize) -> Result<f64, LocatorError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| csv_error(format!("Missing column at index {}", idx)))?
        .trim();
    raw.parse()
        .map_err(|_| csv_error(format!("Invalid coordinate: '{}'", raw)))
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file with
/// grid locators.
///
/// Output columns are `locator`, then `distance_km` when a home is configured,
/// then `cell_geometry` when requested, then the remaining input columns.
/// Streams output to minimize memory usage for large files.
///
/// # Example
///
/// ```no_run
/// use maidenhead_rs::{csv_to_grid_csv, CsvGridConfig, GeometryFormat, Precision};
///
/// let config = CsvGridConfig::from_coords("lon", "lat")
///     .precision(Precision::Extended)
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_grid_csv("spots.csv", "spots_grid.csv", &config).unwrap();
/// ```
pub fn csv_to_grid_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvGridConfig,
) -> Result<(), LocatorError> {
    let file = File::open(csv_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let source_indices = match &config.source {
        CoordinateSource::GeometryColumn(col) => SourceIndices::Geometry(find_column(&headers, col)?),
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => SourceIndices::Coordinates {
            lon_idx: find_column(&headers, lon_column)?,
            lat_idx: find_column(&headers, lat_column)?,
        },
    };

    let mut exclude_indices: HashSet<usize> = match source_indices {
        SourceIndices::Geometry(idx) => HashSet::from([idx]),
        SourceIndices::Coordinates { lon_idx, lat_idx } => HashSet::from([lon_idx, lat_idx]),
    };
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["locator"];
    if config.home.is_some() {
        header_row.push("distance_km");
    }
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    header_row.extend(
        headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !exclude_indices.contains(i))
            .map(|(_, h)| h),
    );
    writer.write_record(&header_row).map_err(csv_error)?;

    let mut rows_written = 0usize;
    for result in reader.records() {
        let record = result.map_err(csv_error)?;

        let mut points = Vec::new();
        match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record
                    .get(*idx)
                    .ok_or_else(|| csv_error(format!("Missing geometry column at index {}", idx)))?;
                geometry_points(parse_geometry(geom_str)?, &mut points);
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon = parse_degrees(&record, *lon_idx)?;
                let lat = parse_degrees(&record, *lat_idx)?;
                points.push(Point::new(lon, lat));
            }
        }

        for square in points_to_squares(&points, config.precision)? {
            let mut row: Vec<String> = vec![square.to_string()];

            if let Some(home) = &config.home {
                row.push(home.distance_to_square_km(&square).to_string());
            }

            if let Some(format) = config.include_cell_geometry {
                let polygon = square.to_polygon();
                row.push(match format {
                    GeometryFormat::Wkt => {
                        use wkt::ToWkt;
                        polygon.wkt_string()
                    }
                    GeometryFormat::GeoJson => geojson::Geometry::from(&polygon).to_string(),
                });
            }

            row.extend(
                record
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !exclude_indices.contains(i))
                    .map(|(_, field)| field.to_string()),
            );
            writer.write_record(&row).map_err(csv_error)?;
            rows_written += 1;
        }
    }

    writer.flush().map_err(csv_error)?;
    debug!("Wrote {} locator rows", rows_written);

    Ok(())
}
