use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use log::info;

use crate::geo::LatLng;
use crate::track::status::TrackingStatus;

/// Identifier of a posted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}

/// Where the session sits in the poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No poll has been applied yet.
    Idle,
    /// The tasker is sharing their location but no fix has arrived.
    WaitingForSignal,
    /// Live positions are flowing.
    Tracking,
    /// The tasker is not sharing their location.
    NotTracking,
}

/// What a single applied status payload changed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SessionChange {
    /// The tasker began sharing their location this poll.
    pub started: bool,
    /// The tasker stopped sharing; session state was cleared.
    pub stopped: bool,
    /// A fresh fix, when the payload carried one.
    pub position: Option<LatLng>,
}

/// One active tracking subscription: the state rebuilt poll-by-poll for
/// a single task. Torn down with the owning view; nothing persists.
#[derive(Debug)]
pub struct TrackingSession {
    task: TaskId,
    phase: Phase,
    last_position: Option<LatLng>,
    last_update: Option<DateTime<Utc>>,
    notified_start: bool,
}

impl TrackingSession {
    pub fn new(task: TaskId) -> Self {
        TrackingSession {
            task,
            phase: Phase::Idle,
            last_position: None,
            last_update: None,
            notified_start: false,
        }
    }

    pub fn task(&self) -> TaskId {
        self.task
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_position(&self) -> Option<LatLng> {
        self.last_position
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::WaitingForSignal | Phase::Tracking)
    }

    /// Applies one status payload and reports what changed.
    ///
    /// A stop clears the position and the started flag, so a later
    /// restart reports `started` again. A tracking payload without a
    /// usable fix parks the session in [`Phase::WaitingForSignal`]
    /// until the first fix arrives; mid-session dropouts keep the last
    /// known position on display.
    pub fn apply(&mut self, status: &TrackingStatus) -> SessionChange {
        let mut change = SessionChange::default();

        if !status.is_tracking {
            if self.is_tracking() {
                info!("Task {}: tasker stopped sharing their location", self.task);
                change.stopped = true;
            }

            self.phase = Phase::NotTracking;
            self.last_position = None;
            self.last_update = None;
            self.notified_start = false;
            return change;
        }

        if !self.notified_start {
            info!("Task {}: tasker started sharing their location", self.task);
            self.notified_start = true;
            change.started = true;
        }

        match status.position() {
            Some(position) => {
                self.phase = Phase::Tracking;
                self.last_position = Some(position);
                self.last_update = status.last_location_update;
                change.position = Some(position);
            }
            None if self.phase != Phase::Tracking => {
                self.phase = Phase::WaitingForSignal;
            }
            None => {}
        }

        change
    }
}
