use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;

use crate::geo::LatLng;

/// Wire payload of `GET /api/tasks/{task_id}/tracking-status`.
///
/// Absent or null coordinate fields mean the tasker has not produced a
/// fix yet; they are never an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackingStatus {
    pub is_tracking: bool,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub last_location_update: Option<DateTime<Utc>>,
}

impl TrackingStatus {
    /// The reported position, if the payload carries a usable one.
    ///
    /// A missing component or an out-of-range pair reads as "no fix
    /// yet" and is only surfaced in the debug log.
    pub fn position(&self) -> Option<LatLng> {
        let lat = self.current_latitude?;
        let lng = self.current_longitude?;

        match LatLng::from_degree(lat, lng) {
            Ok(position) => Some(position),
            Err(err) => {
                debug!("Discarding malformed position ({lat}, {lng}): {err:?}");
                None
            }
        }
    }
}
