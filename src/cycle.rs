use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Error, Result};

/// Whole-millisecond bounds inside `[min, max]`: `min` rounded up, `max`
/// rounded down. Fails if no whole millisecond lies in the range.
pub(crate) fn whole_millis(min: Duration, max: Duration) -> Result<(u64, u64)> {
    let min_ms = min.as_millis() as u64 + u64::from(min.subsec_nanos() % 1_000_000 != 0);
    let max_ms = max.as_millis() as u64;

    if min_ms > max_ms {
        return Err(Error::InvalidCycleBounds { min, max });
    }

    Ok((min_ms, max_ms))
}

/// Draws the length of each traffic light cycle.
///
/// Lengths are whole milliseconds, uniform over `[min, max]` inclusive. The
/// generator belongs to one light, so a seeded light always produces the same
/// sequence of cycles.
#[derive(Debug)]
pub struct CycleDurations {
    rng: StdRng,
    min_ms: u64,
    max_ms: u64,
}

impl CycleDurations {
    /// Fails with [`Error::InvalidCycleBounds`] if `[min, max]` holds no whole
    /// millisecond.
    pub fn new(min: Duration, max: Duration, seed: Option<u64>) -> Result<Self> {
        let (min_ms, max_ms) = whole_millis(min, max)?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(CycleDurations {
            rng,
            min_ms,
            max_ms,
        })
    }

    pub fn next_cycle(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(self.min_ms..=self.max_ms))
    }
}

impl Iterator for CycleDurations {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        Some(self.next_cycle())
    }
}
