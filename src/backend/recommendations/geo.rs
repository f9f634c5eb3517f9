/**
 * Geodesic Distance
 *
 * Haversine great-circle distance, used to annotate and sort nearby places.
 */

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two WGS84 points.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance rounded to two decimals, the precision exposed over the API.
pub fn distance_km_rounded(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (haversine_km(lat1, lon1, lat2, lon2) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        assert_eq!(haversine_km(48.85, 2.35, 48.85, 2.35), 0.0);
    }

    #[test]
    fn test_known_city_pair() {
        // Paris (48.8566, 2.3522) to London (51.5074, -0.1278): ~343-344 km.
        let d = haversine_km(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((343.0..345.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_symmetry() {
        let a = haversine_km(10.0, 20.0, 30.0, 40.0);
        let b = haversine_km(30.0, 40.0, 10.0, 20.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_rounding() {
        // ~0.222 km per 0.002 degrees of latitude at the equator.
        let d = distance_km_rounded(0.0, 0.0, 0.002, 0.0);
        assert_eq!(d, 0.22);
    }
}
