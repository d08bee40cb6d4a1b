//! Live tracking for a booked task: a per-task polling loop over the
//! tracking-status endpoint, session state, and the one-shot
//! "on the way" / "arriving soon" notices raised as the tasker
//! approaches the task address.

#[doc(hidden)]
pub mod error;
pub mod monitor;
pub mod poller;
pub mod proximity;
pub mod session;
pub mod source;
pub mod status;

#[doc(inline)]
pub use monitor::{TrackMonitor, TrackingEvent};
#[doc(inline)]
pub use poller::{Poller, PollerConfig, PollerHandle};
#[doc(inline)]
pub use proximity::ProximityWatch;
#[doc(inline)]
pub use session::{Phase, TaskId, TrackingSession};
#[doc(inline)]
pub use source::{HttpStatusSource, StatusSource};
#[doc(inline)]
pub use status::TrackingStatus;
