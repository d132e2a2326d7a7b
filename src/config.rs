use std::time::Duration;

use tracing::warn;

use crate::{cycle::whole_millis, message_queue::QueueOrder, Error, Result};

pub const DEFAULT_MIN_CYCLE: Duration = Duration::from_millis(4000);
pub const DEFAULT_MAX_CYCLE: Duration = Duration::from_millis(6000);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct TrafficLightConfig {
    /// Shortest cycle, inclusive.
    pub min_cycle: Duration,
    /// Longest cycle, inclusive.
    pub max_cycle: Duration,
    /// Sleep between elapsed time checks in the cycling loop.
    pub poll_interval: Duration,
    /// Seed for the cycle length generator. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub queue_order: QueueOrder,
}

impl Default for TrafficLightConfig {
    fn default() -> Self {
        TrafficLightConfig {
            min_cycle: DEFAULT_MIN_CYCLE,
            max_cycle: DEFAULT_MAX_CYCLE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            seed: None,
            queue_order: QueueOrder::Fifo,
        }
    }
}

impl TrafficLightConfig {
    pub fn validate(&self) -> Result<()> {
        // cycles are drawn in whole milliseconds, so the range must contain one
        if let Err(e) = whole_millis(self.min_cycle, self.max_cycle) {
            warn!(min = ?self.min_cycle, max = ?self.max_cycle, "rejecting cycle bounds");
            return Err(e);
        }

        if self.poll_interval.is_zero() {
            warn!("rejecting zero poll interval");
            return Err(Error::ZeroPollInterval);
        }

        Ok(())
    }
}
