use std::time::Duration;

use dotenv::dotenv;
use tokio::sync::mpsc;

use arrivo::geo::LatLng;
use arrivo::track::{HttpStatusSource, Poller, PollerConfig, TaskId, TrackingEvent};

/// Follows one task's tasker from the terminal: reads the backend
/// coordinates from the environment, polls, and prints each notice the
/// booking view would toast.
#[tokio::main]
async fn main() {
    let _ = dotenv();

    #[cfg(feature = "tracing")]
    arrivo::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let base_url = env_var("ARRIVO_BASE_URL");
    let token = env_var("ARRIVO_TOKEN");
    let task = TaskId(parsed_env("ARRIVO_TASK_ID"));

    let destination = LatLng::from_degree(
        parsed_env("ARRIVO_DEST_LAT"),
        parsed_env("ARRIVO_DEST_LNG"),
    )
    .expect("Destination out of range");

    let mut config = PollerConfig::new(task, destination);
    if let Ok(secs) = std::env::var("ARRIVO_POLL_SECS") {
        config.interval = Duration::from_secs(secs.parse().expect("ARRIVO_POLL_SECS must be seconds"));
    }

    let source = HttpStatusSource::new(&base_url, &token);
    let (events_tx, mut events) = mpsc::channel(16);
    let handle = Poller::new(config, source, events_tx).spawn();

    println!("Tracking task {task}, destination {destination:?}");

    while let Some(event) = events.recv().await {
        match event {
            TrackingEvent::Started => println!("Your tasker is on the way!"),
            TrackingEvent::Position {
                location,
                distance_km,
                eta_minutes,
            } => println!("Tasker at {location:?}, {distance_km:.1}km away, about {eta_minutes} min"),
            TrackingEvent::ArrivingSoon { distance_km } => {
                println!("Your tasker is arriving soon ({distance_km:.1}km away)")
            }
            TrackingEvent::Stopped => println!("Tasker stopped sharing their location"),
        }
    }

    handle.stop();
}

fn env_var(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| panic!("{key} must be set"))
}

fn parsed_env<T: std::str::FromStr>(key: &str) -> T {
    env_var(key)
        .parse()
        .unwrap_or_else(|_| panic!("{key} could not be parsed"))
}
