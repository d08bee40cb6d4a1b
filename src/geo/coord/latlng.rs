use std::fmt::{Debug, Formatter};

use crate::geo::error::GeoError;

pub type NanoDegree = i64;
pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair locating a tasker or a task address.
///
/// Held as nanodegrees so positions compare exactly; degree accessors
/// convert on the way out.
///
/// ```rust,ignore
/// use arrivo::geo::LatLng;
/// let latlng = LatLng::from_degree(-33.8853, 151.1946)?;
/// println!("Position: {:?}", latlng);
/// ```
#[derive(Clone, Copy, PartialOrd, PartialEq, Eq)]
pub struct LatLng {
    pub lat: NanoDegree,
    pub lng: NanoDegree,
}

impl LatLng {
    /// Constructs a new `LatLng` from a given `lat` and `lng`, in nanodegrees.
    pub fn new(lat: NanoDegree, lng: NanoDegree) -> Self {
        LatLng { lat, lng }
    }

    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !(lat > -90f64 && lat < 90f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be greater than -90 and less than 90. Given: {}",
                lat
            )));
        }

        if !(lng < 180f64 && lng > -180f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be greater than -180 and less than 180. Given: {}",
                lng
            )));
        }

        Ok(Self::from_degree_unchecked(lat, lng))
    }

    pub fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        LatLng {
            lat: (lat * 1e7) as i64,
            lng: (lng * 1e7) as i64,
        }
    }

    pub fn lat(&self) -> Degree {
        self.lat as f64 * 1e-7
    }

    pub fn nano_lat(&self) -> NanoDegree {
        self.lat
    }

    pub fn lng(&self) -> Degree {
        self.lng as f64 * 1e-7
    }

    pub fn nano_lng(&self) -> NanoDegree {
        self.lng
    }

    /// Returns a (`lat`, `lng`) degree pair.
    pub fn expand(&self) -> (Degree, Degree) {
        (self.lat(), self.lng())
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng(), self.lat())
    }
}

impl From<&LatLng> for geo::Point {
    fn from(value: &LatLng) -> Self {
        geo::Point::new(value.lng(), value.lat())
    }
}
