use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("minimum cycle length {min:?} is greater than maximum {max:?}")]
    InvalidCycleBounds { min: Duration, max: Duration },

    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("traffic light is already simulating")]
    AlreadySimulating,

    #[error("unable to spawn phase cycling thread")]
    Spawn(#[source] std::io::Error),

    #[cfg(feature = "subscriber")]
    #[error("unable to install tracing subscriber")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
