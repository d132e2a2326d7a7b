use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, info};

use crate::{
    broadcast::PhaseBroadcast,
    config::TrafficLightConfig,
    cycle::CycleDurations,
    message_queue::MessageQueue,
    phase::{AtomicPhase, Phase},
    Error, Result,
};

pub const CYCLE_THREAD_NAME: &str = "traffic-light-cycle";

pub type ThreadSafeTrafficLight = Arc<TrafficLight>;

/// State shared with the cycling thread.
#[derive(Debug)]
pub(crate) struct Shared {
    current_phase: AtomicPhase,

    /// Phase changes, each handed to a single waiter
    queue: MessageQueue<Phase>,

    /// Phase changes, seen by every waiter
    broadcast: PhaseBroadcast,
}

impl Shared {
    /// Flips the phase, then publishes the new one.
    /// The phase is stored and broadcast before it is queued, so a waiter
    /// released by the queue already sees both.
    fn toggle_phase(&self) -> Phase {
        let phase = self.current_phase.toggle();
        self.broadcast.publish(phase);
        self.queue.send(phase);
        phase
    }
}

/// A traffic light that alternates between red and green on a randomized timer.
///
/// The light starts red. [`simulate`](Self::simulate) starts a background
/// thread which flips the phase every `min_cycle..=max_cycle` and publishes
/// each change. The thread runs for as long as the light exists; there is no
/// other way to stop it.
#[derive(Debug)]
pub struct TrafficLight {
    config: TrafficLightConfig,

    shared: Arc<Shared>,

    /// Whether the cycling thread has been started
    simulating: AtomicBool,
}

impl Default for TrafficLight {
    fn default() -> Self {
        TrafficLight::from_valid_config(TrafficLightConfig::default())
    }
}

impl TrafficLight {
    pub fn new(config: TrafficLightConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TrafficLightConfig) -> Self {
        let shared = Arc::new(Shared {
            current_phase: AtomicPhase::new(Phase::Red),
            queue: MessageQueue::with_order(config.queue_order),
            broadcast: PhaseBroadcast::new(),
        });

        TrafficLight {
            config,
            shared,
            simulating: AtomicBool::new(false),
        }
    }

    /// Starts cycling through phases on a background thread and returns.
    ///
    /// Fails if the light is already simulating, the config is invalid or the
    /// thread can't be spawned.
    pub fn simulate(&self) -> Result<()> {
        self.config.validate()?;
        let durations = CycleDurations::new(
            self.config.min_cycle,
            self.config.max_cycle,
            self.config.seed,
        )?;

        if self.simulating.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadySimulating);
        }

        let shared = Arc::downgrade(&self.shared);
        let poll_interval = self.config.poll_interval;

        info!(
            min_cycle = ?self.config.min_cycle,
            max_cycle = ?self.config.max_cycle,
            ?poll_interval,
            seed = ?self.config.seed,
            "starting phase cycle"
        );

        thread::Builder::new()
            .name(CYCLE_THREAD_NAME.to_string())
            .spawn(move || cycle_through_phases(shared, durations, poll_interval))
            .map_err(|e| {
                self.simulating.store(false, Ordering::SeqCst);
                Error::Spawn(e)
            })?;

        Ok(())
    }

    pub fn config(&self) -> &TrafficLightConfig {
        &self.config
    }

    pub fn is_simulating(&self) -> bool {
        self.simulating.load(Ordering::SeqCst)
    }

    pub fn current_phase(&self) -> Phase {
        self.shared.current_phase.load()
    }

    /// Blocks until a green phase change is received.
    ///
    /// Red changes received on the way are discarded. Each change is consumed by
    /// one caller, so concurrent waiters compete for the same green; see
    /// [`wait_for_green_broadcast`](Self::wait_for_green_broadcast) to release all of them.
    pub fn wait_for_green(&self) {
        self.wait_for_phase(Phase::Green);
    }

    pub fn wait_for_phase(&self, target: Phase) {
        while self.shared.queue.receive() != target {}
    }

    /// Like [`wait_for_green`](Self::wait_for_green), giving up after `timeout`.
    /// Returns whether green was received.
    pub fn wait_for_green_timeout(&self, timeout: Duration) -> bool {
        self.wait_for_phase_timeout(Phase::Green, timeout)
    }

    pub fn wait_for_phase_timeout(&self, target: Phase, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.shared.queue.receive_timeout(remaining) {
                Some(phase) if phase == target => return true,
                Some(_) => continue,
                None => return false,
            }
        }
    }

    /// Blocks until the next transition to green. Every caller waiting at that
    /// moment is released, and no queued change is consumed.
    pub fn wait_for_green_broadcast(&self) {
        self.shared.broadcast.wait_for(Phase::Green);
    }

    pub fn broadcast(&self) -> &PhaseBroadcast {
        &self.shared.broadcast
    }

    #[cfg(test)]
    pub(crate) fn queue(&self) -> &MessageQueue<Phase> {
        &self.shared.queue
    }

    #[cfg(test)]
    pub(crate) fn config_mut(&mut self) -> &mut TrafficLightConfig {
        &mut self.config
    }

    #[cfg(test)]
    pub(crate) fn toggle_phase(&self) -> Phase {
        self.shared.toggle_phase()
    }

    #[cfg(test)]
    pub(crate) fn downgrade(&self) -> Weak<Shared> {
        Arc::downgrade(&self.shared)
    }
}

/// The cycling loop. Polls the elapsed time every `poll_interval` and flips the
/// phase once the current cycle is over. Exits once the light is dropped.
fn cycle_through_phases(
    shared: Weak<Shared>,
    mut durations: CycleDurations,
    poll_interval: Duration,
) {
    let mut cycle = durations.next_cycle();
    let mut last_change = Instant::now();

    loop {
        thread::sleep(poll_interval);

        let Some(shared) = shared.upgrade() else {
            debug!("traffic light dropped, stopping phase cycle");
            return;
        };

        let elapsed = last_change.elapsed();
        if elapsed < cycle {
            continue;
        }

        let phase = shared.toggle_phase();
        debug!(%phase, ?cycle, ?elapsed, "phase changed");

        last_change = Instant::now();
        cycle = durations.next_cycle();
    }
}
