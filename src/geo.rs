//! Great-circle distance between geographic coordinates.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A location in geographic degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance in kilometers via the spherical law of cosines.
///
/// Callers supply already-validated degrees; no range checking happens here.
/// The cosine argument is clamped to `[-1, 1]` before `acos`: rounding can
/// push it slightly out of range for nearly identical or near-antipodal
/// points, and `acos` would then return NaN.
pub fn great_circle_km(a: GeoPoint, b: GeoPoint) -> f64 {
    // sin^2 + cos^2 can land a hair below 1.0 in floating point, which the
    // clamp cannot repair; identical points must come out at exactly zero.
    if a == b {
        return 0.0;
    }

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_distance_is_exact() {
        let p = GeoPoint::new(-6.2088, 106.8456);
        assert_eq!(great_circle_km(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_on_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        assert!((great_circle_km(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pole_to_pole() {
        let north = GeoPoint::new(90.0, 0.0);
        let south = GeoPoint::new(-90.0, 0.0);
        let expected = EARTH_RADIUS_KM * PI;
        assert!((great_circle_km(north, south) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_does_not_produce_nan() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = great_circle_km(a, b);
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * PI).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = GeoPoint::new(lat1, lon1);
            let b = GeoPoint::new(lat2, lon2);
            let ab = great_circle_km(a, b);
            let ba = great_circle_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_bounded_and_non_negative(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let d = great_circle_km(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-9);
        }

        #[test]
        fn prop_identical_points_are_zero(
            lat in -90.0f64..90.0, lon in -180.0f64..180.0,
        ) {
            let p = GeoPoint::new(lat, lon);
            prop_assert_eq!(great_circle_km(p, p), 0.0);
        }
    }
}
