use crate::util::error::LocatorError;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_error(e: impl ToString) -> LocatorError {
    LocatorError::GeometryParseError(e.to_string())
}

/// Parses a GeoJSON geometry, feature or feature collection.
///
/// A feature collection becomes a `GeometryCollection`; features without a
/// geometry are skipped.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let geojson = s.parse::<GeoJson>().map_err(parse_error)?;

    match geojson {
        GeoJson::Geometry(geom) => Geometry::try_from(geom).map_err(parse_error),
        GeoJson::Feature(feat) => {
            let geom = feat
                .geometry
                .ok_or_else(|| parse_error("Feature has no geometry"))?;
            Geometry::try_from(geom).map_err(parse_error)
        }
        GeoJson::FeatureCollection(fc) => {
            let geometries = fc
                .features
                .into_iter()
                .filter_map(|feat| feat.geometry)
                .map(|geom| Geometry::try_from(geom).map_err(parse_error))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::GeometryCollection(GeometryCollection(geometries)))
        }
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let wkt: Wkt<f64> = Wkt::from_str(s).map_err(parse_error)?;

    wkt.try_into()
        .map_err(|_| parse_error("Failed to convert WKT to geometry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), LocatorError> {
        let json = r#"{"type":"Point","coordinates":[11.6,48.1]}"#;
        match parse_geometry(json)? {
            Geometry::Point(pt) => {
                assert!((pt.x() - 11.6).abs() < 0.001);
                assert!((pt.y() - 48.1).abs() < 0.001);
            }
            other => panic!("Expected Point, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_collection() -> Result<(), LocatorError> {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[11.6,48.1]}},
            {"type":"Feature","properties":{},"geometry":null},
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-72.7,41.7]}}
        ]}"#;
        match parse_geometry(json)? {
            Geometry::GeometryCollection(gc) => assert_eq!(gc.0.len(), 2),
            other => panic!("Expected GeometryCollection, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_linestring() -> Result<(), LocatorError> {
        let wkt = "LINESTRING(11.6 48.1, 11.7 48.2)";
        match parse_geometry(wkt)? {
            Geometry::LineString(line) => assert_eq!(line.0.len(), 2),
            other => panic!("Expected LineString, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_geometry("not a geometry"),
            Err(LocatorError::GeometryParseError(_))
        ));
        assert!(matches!(
            parse_geometry("{\"type\":\"Nope\"}"),
            Err(LocatorError::GeometryParseError(_))
        ));
    }
}
