#![doc = include_str!("../../docs/geo.md")]

/// Mean Earth radius, in kilometres, for spherical distance work.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

#[doc(hidden)]
pub mod coord;
pub mod distance;
#[doc(hidden)]
pub mod error;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use coord::latlng::LatLng;
#[doc(inline)]
pub use distance::{eta_minutes, haversine_km};
