//! Great-circle distance between two geographic points.
//!
//! Uses the Haversine formula on a spherical Earth with radius 3959 statute
//! miles, matching the 50-mile eligibility radius's units. Double-precision
//! throughout; accurate to well under 0.5% for the distances involved here.

use caseflow_contracts::location::GeoPoint;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine great-circle distance between `a` and `b`, in statute miles.
///
/// Pure and symmetric: `distance_miles(a, b) == distance_miles(b, a)`.
/// Callers are responsible for ensuring both points are usable
/// ([`GeoPoint::is_usable`]); the math itself does not guard against
/// placeholder or out-of-range coordinates.
pub fn distance_miles(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let p = GeoPoint::new(34.0522, -118.2437);
        assert_eq!(distance_miles(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let la = GeoPoint::new(34.0522, -118.2437);
        let nyc = GeoPoint::new(40.7128, -74.0060);
        let forward = distance_miles(&la, &nyc);
        let back = distance_miles(&nyc, &la);
        assert!((forward - back).abs() < 1e-9, "{} vs {}", forward, back);
    }

    /// One degree of latitude is ~69.17 statute miles on this sphere.
    /// Validates both the formula and the Earth-radius constant.
    #[test]
    fn one_degree_of_latitude_is_about_69_miles() {
        let a = GeoPoint::new(34.0, -118.0);
        let b = GeoPoint::new(35.0, -118.0);

        let d = distance_miles(&a, &b);
        let expected = 69.1;
        assert!(
            (d - expected).abs() / expected < 0.01,
            "expected ~{} miles, got {}",
            expected,
            d
        );
    }

    /// Los Angeles to New York is roughly 2,450 miles great-circle.
    #[test]
    fn cross_country_distance_sanity() {
        let la = GeoPoint::new(34.0522, -118.2437);
        let nyc = GeoPoint::new(40.7128, -74.0060);

        let d = distance_miles(&la, &nyc);
        assert!(d > 2400.0 && d < 2500.0, "got {}", d);
    }
}
