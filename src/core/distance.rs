use crate::core::constants::EARTH_RADIUS_KM;

/// Great-circle distance in kilometres between two `(lat, lon)` points in radians.
///
/// Haversine formula on a sphere of radius 6371 km.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can leave `a` a hair above 1 for antipodes.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    c * EARTH_RADIUS_KM
}

/// Same as [`haversine_km`], truncated toward zero to whole kilometres.
pub fn haversine_km_truncated(from: (f64, f64), to: (f64, f64)) -> u32 {
    haversine_km(from, to) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = (0.84_f64, 0.2_f64);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km((0.0, 0.0), (1.0_f64.to_radians(), 0.0));
        assert!((d - 111.19).abs() < 0.01);
        assert_eq!(haversine_km_truncated((0.0, 0.0), (1.0_f64.to_radians(), 0.0)), 111);
    }

    #[test]
    fn test_antipodes() {
        let d = haversine_km((0.0, 0.0), (0.0, std::f64::consts::PI));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
        assert_eq!(haversine_km_truncated((0.0, 0.0), (0.0, std::f64::consts::PI)), 20015);
    }

    #[test]
    fn test_symmetry() {
        let a = (0.84, 0.2);
        let b = (-0.3, 2.1);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }
}
