use crate::geo::coord::latlng::LatLng;
use crate::geo::MEAN_EARTH_RADIUS_KM;

/// Assumed average urban travel speed, in km/h, for arrival estimates.
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Great-circle distance between two positions, in kilometres.
///
/// Haversine over a spherical Earth. Inputs are not validated; a
/// coordinate outside the valid range yields a mathematically odd but
/// finite result.
pub fn haversine_km(lhs: &LatLng, rhs: &LatLng) -> f64 {
    let (l_lat, l_lng) = lhs.expand();
    let (r_lat, r_lng) = rhs.expand();

    let theta1 = l_lat.to_radians();
    let theta2 = r_lat.to_radians();
    let delta_theta = (r_lat - l_lat).to_radians();
    let delta_lambda = (r_lng - l_lng).to_radians();

    let a = (delta_theta / 2f64).sin().powi(2)
        + theta1.cos() * theta2.cos() * (delta_lambda / 2f64).sin().powi(2);

    let c = 2f64 * a.sqrt().asin();
    MEAN_EARTH_RADIUS_KM * c
}

/// Rough minutes-to-arrival for a tasker `distance_km` away, assuming
/// [`AVERAGE_SPEED_KMH`]. A heuristic for the booking view, not a
/// routed estimate.
pub fn eta_minutes(distance_km: f64) -> u32 {
    (distance_km / AVERAGE_SPEED_KMH * 60f64).round() as u32
}
