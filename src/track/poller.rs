use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::geo::LatLng;
use crate::track::monitor::{TrackMonitor, TrackingEvent};
use crate::track::proximity::DEFAULT_THRESHOLD_KM;
use crate::track::session::TaskId;
use crate::track::source::StatusSource;

/// How often the tracking endpoint is polled unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Per-task polling configuration.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub task: TaskId,
    /// The task address the tasker is heading to.
    pub destination: LatLng,
    pub interval: Duration,
    pub threshold_km: f64,
}

impl PollerConfig {
    pub fn new(task: TaskId, destination: LatLng) -> Self {
        PollerConfig {
            task,
            destination,
            interval: DEFAULT_POLL_INTERVAL,
            threshold_km: DEFAULT_THRESHOLD_KM,
        }
    }
}

/// Polls a [`StatusSource`] for one task and pushes [`TrackingEvent`]s
/// to the consumer.
///
/// Every tick issues its fetch as a separate task tagged with a
/// sequence number, so a slow response never delays the next tick and
/// overlapping responses resolve in whatever order the network allows;
/// the monitor keeps whichever is newest. Tracking a different task
/// means a fresh poller.
pub struct Poller<S> {
    config: PollerConfig,
    source: Arc<S>,
    events: mpsc::Sender<TrackingEvent>,
}

impl<S> Poller<S>
where
    S: StatusSource + Send + Sync + 'static,
{
    pub fn new(config: PollerConfig, source: S, events: mpsc::Sender<TrackingEvent>) -> Self {
        Poller {
            config,
            source: Arc::new(source),
            events,
        }
    }

    /// Spawns the poll loop, running until [`PollerHandle::stop`] is
    /// called, the handle is dropped, or the event consumer goes away.
    pub fn spawn(self) -> PollerHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let worker = tokio::spawn(self.run(stop_rx));

        PollerHandle {
            stop: stop_tx,
            worker,
        }
    }

    async fn run(self, mut stop: watch::Receiver<bool>) {
        let mut monitor = TrackMonitor::new(
            self.config.task,
            self.config.destination,
            self.config.threshold_km,
        );

        let mut ticker = time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Responses funnel back through one channel so the loop stays
        // single-threaded over the monitor state.
        let (response_tx, mut response_rx) = mpsc::channel(8);
        let mut seq: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    seq += 1;
                    let source = Arc::clone(&self.source);
                    let task = self.config.task;
                    let responses = response_tx.clone();

                    tokio::spawn(async move {
                        let result = source.fetch(task).await;
                        // The loop may have stopped mid-flight.
                        let _ = responses.send((seq, result)).await;
                    });
                }
                Some((poll_seq, result)) = response_rx.recv() => {
                    match result {
                        Ok(status) => {
                            for event in monitor.apply(poll_seq, &status) {
                                if self.events.send(event).await.is_err() {
                                    debug!(
                                        "Task {}: event consumer gone, poll loop ending",
                                        self.config.task
                                    );
                                    return;
                                }
                            }
                        }
                        Err(err) => {
                            // Transient by contract; the next tick retries.
                            warn!(
                                "Task {}: tracking poll #{poll_seq} failed: {err:?}",
                                self.config.task
                            );
                        }
                    }
                }
                _ = stop.changed() => {
                    if *stop.borrow() {
                        debug!("Task {}: tracking stopped", self.config.task);
                        return;
                    }
                }
            }
        }
    }
}

/// Handle over a spawned poll loop.
///
/// Dropping the handle aborts the loop outright; [`stop`][Self::stop]
/// is the graceful equivalent. Either way, in-flight responses are
/// dropped without touching session state.
pub struct PollerHandle {
    stop: watch::Sender<bool>,
    worker: JoinHandle<()>,
}

impl PollerHandle {
    /// Asks the loop to wind down. In-flight requests are abandoned;
    /// their responses never reach the monitor.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Waits for the loop to finish. Call after [`stop`][Self::stop].
    pub async fn join(mut self) {
        let _ = (&mut self.worker).await;
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
