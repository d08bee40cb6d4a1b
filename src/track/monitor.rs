use log::debug;

use crate::geo::{eta_minutes, haversine_km, LatLng};
use crate::track::proximity::ProximityWatch;
use crate::track::session::{TaskId, TrackingSession};
use crate::track::status::TrackingStatus;

/// A change the booking view should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingEvent {
    /// The tasker began sharing their location. Once per session.
    Started,
    /// A fresh fix, with distance to the task address and a rough ETA.
    Position {
        location: LatLng,
        distance_km: f64,
        eta_minutes: u32,
    },
    /// The tasker crossed inside the proximity threshold. Once per session.
    ArrivingSoon { distance_km: f64 },
    /// The tasker stopped sharing; session state was cleared.
    Stopped,
}

/// Applies poll responses, newest wins, and turns session changes into
/// [`TrackingEvent`]s.
///
/// Polls overlap: a slow response for poll N can resolve after poll
/// N+1's. Each response carries its poll's sequence number, and any
/// response that is not newer than the last applied one is discarded.
pub struct TrackMonitor {
    session: TrackingSession,
    proximity: ProximityWatch,
    destination: LatLng,
    last_applied: u64,
}

impl TrackMonitor {
    pub fn new(task: TaskId, destination: LatLng, threshold_km: f64) -> Self {
        TrackMonitor {
            session: TrackingSession::new(task),
            proximity: ProximityWatch::new(threshold_km),
            destination,
            last_applied: 0,
        }
    }

    pub fn session(&self) -> &TrackingSession {
        &self.session
    }

    pub fn destination(&self) -> LatLng {
        self.destination
    }

    /// Applies the response of poll `seq`. Returns the events it
    /// produced, oldest first; empty when the response was stale or
    /// changed nothing worth surfacing.
    pub fn apply(&mut self, seq: u64, status: &TrackingStatus) -> Vec<TrackingEvent> {
        if seq <= self.last_applied {
            debug!(
                "Task {}: discarding stale poll #{seq} (already applied #{})",
                self.session.task(),
                self.last_applied
            );
            return Vec::new();
        }
        self.last_applied = seq;

        let change = self.session.apply(status);
        let mut events = Vec::new();

        if change.started {
            events.push(TrackingEvent::Started);
        }

        if let Some(location) = change.position {
            let distance_km = haversine_km(&location, &self.destination);
            events.push(TrackingEvent::Position {
                location,
                distance_km,
                eta_minutes: eta_minutes(distance_km),
            });

            if self.proximity.observe(distance_km) {
                events.push(TrackingEvent::ArrivingSoon { distance_km });
            }
        }

        if change.stopped {
            self.proximity.reset();
            events.push(TrackingEvent::Stopped);
        }

        events
    }
}
