use geo_types::{Point, Polygon, Rect, coord};

/// Builds the rectangle of a cell from its southwest corner and size in degrees.
pub fn create_cell_rect(southwest: &Point<f64>, width: f64, height: f64) -> Rect<f64> {
    Rect::new(
        coord! { x: southwest.x(), y: southwest.y() },
        coord! { x: southwest.x() + width, y: southwest.y() + height },
    )
}

/// Builds the closed polygon of a cell.
pub fn create_cell_polygon(southwest: &Point<f64>, width: f64, height: f64) -> Polygon<f64> {
    create_cell_rect(southwest, width, height).to_polygon()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_create_cell_rect() {
        let rect = create_cell_rect(&point! { x: 10.0, y: 48.0 }, 2.0, 1.0);
        assert_eq!(rect.min(), coord! { x: 10.0, y: 48.0 });
        assert_eq!(rect.max(), coord! { x: 12.0, y: 49.0 });
    }

    #[test]
    fn test_create_cell_polygon() {
        let poly = create_cell_polygon(&point! { x: 10.0, y: 48.0 }, 2.0, 1.0);
        let exterior = poly.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 corners + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]);
    }
}
