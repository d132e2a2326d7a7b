mod broadcast;
mod config;
mod cycle;
mod error;
mod message_queue;
mod phase;
mod traffic_light;

#[cfg(feature = "subscriber")]
mod tracing_init;

#[cfg(test)]
mod tests;

pub use broadcast::PhaseBroadcast;
pub use config::{
    TrafficLightConfig, DEFAULT_MAX_CYCLE, DEFAULT_MIN_CYCLE, DEFAULT_POLL_INTERVAL,
};
pub use cycle::CycleDurations;
pub use error::Error;
pub use message_queue::{MessageQueue, QueueOrder};
pub use phase::{AtomicPhase, Phase};
pub use traffic_light::{ThreadSafeTrafficLight, TrafficLight, CYCLE_THREAD_NAME};

#[cfg(feature = "subscriber")]
pub use tracing_init::install_subscriber;

pub type Result<T> = std::result::Result<T, Error>;

/// Creates a traffic light with the default timings and starts it cycling.
pub fn start_traffic_light() -> Result<ThreadSafeTrafficLight> {
    let light = TrafficLight::default();
    light.simulate()?;

    Ok(ThreadSafeTrafficLight::new(light))
}
