use approx::{assert_relative_eq, relative_eq};
use geo::{Distance, Haversine};

use crate::geo::distance::{eta_minutes, haversine_km};
use crate::geo::error::GeoError;
use crate::geo::LatLng;

const SYDNEY_CBD: (f64, f64) = (-33.867487, 151.206990);
const BONDI_BEACH: (f64, f64) = (-33.890842, 151.274292);

#[test]
fn identical_points_have_zero_distance() {
    let position = LatLng::from_degree(SYDNEY_CBD.0, SYDNEY_CBD.1).expect("valid coordinate");
    assert_eq!(haversine_km(&position, &position), 0f64);
}

#[test]
fn distance_is_symmetric() {
    let a = LatLng::from_degree(SYDNEY_CBD.0, SYDNEY_CBD.1).expect("valid coordinate");
    let b = LatLng::from_degree(BONDI_BEACH.0, BONDI_BEACH.1).expect("valid coordinate");

    assert_relative_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
}

#[test]
fn distance_matches_georust_haversine() {
    let a = LatLng::from_degree(SYDNEY_CBD.0, SYDNEY_CBD.1).expect("valid coordinate");
    let b = LatLng::from_degree(BONDI_BEACH.0, BONDI_BEACH.1).expect("valid coordinate");

    let ours = haversine_km(&a, &b) * 1000f64;
    let theirs = Haversine.distance(geo::Point::from(&a), geo::Point::from(&b));

    // Radii differ slightly (spherical mean vs. IUGG mean), so compare loosely.
    assert!(
        relative_eq!(ours, theirs, max_relative = 1e-3),
        "Expected {ours}m to be within 0.1% of {theirs}m"
    );
}

#[test]
fn known_distance_sydney_to_bondi() {
    let a = LatLng::from_degree(SYDNEY_CBD.0, SYDNEY_CBD.1).expect("valid coordinate");
    let b = LatLng::from_degree(BONDI_BEACH.0, BONDI_BEACH.1).expect("valid coordinate");

    let km = haversine_km(&a, &b);
    assert!(
        km > 6f64 && km < 8f64,
        "Sydney CBD to Bondi should be roughly 7km, got {km}"
    );
}

#[test]
fn eta_degenerate_and_unit_cases() {
    assert_eq!(eta_minutes(0f64), 0);
    assert_eq!(eta_minutes(30f64), 60);
    assert_eq!(eta_minutes(2f64), 4);
}

#[test]
fn degree_roundtrip_through_nanodegrees() {
    let position = LatLng::from_degree(-33.885309, 151.19462).expect("valid coordinate");

    assert_relative_eq!(position.lat(), -33.885309, max_relative = 1e-9);
    assert_relative_eq!(position.lng(), 151.19462, max_relative = 1e-9);
}

#[test]
fn out_of_range_degrees_are_rejected() {
    assert!(matches!(
        LatLng::from_degree(95f64, 0f64),
        Err(GeoError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        LatLng::from_degree(0f64, -181f64),
        Err(GeoError::InvalidCoordinate(_))
    ));
}
