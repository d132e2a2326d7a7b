use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::phase::Phase;

#[derive(Debug, Default)]
struct BroadcastState {
    /// Number of transitions into each phase, indexed by `Phase as usize`.
    transitions: [u64; 2],
    latest: Phase,
}

/// Wakes every waiter on a phase transition.
///
/// Unlike [`MessageQueue`](crate::MessageQueue), publishing does not hand the
/// event to a single receiver: anyone waiting for a phase when it is published
/// is released, even if the phase has changed again by the time they run.
#[derive(Debug, Default)]
pub struct PhaseBroadcast {
    state: Mutex<BroadcastState>,
    changed: Condvar,
}

impl PhaseBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, phase: Phase) {
        {
            let mut state = self.state.lock();
            state.transitions[phase as usize] += 1;
            state.latest = phase;
        }
        self.changed.notify_all();
    }

    /// Blocks until the next transition into `target`.
    pub fn wait_for(&self, target: Phase) {
        let mut state = self.state.lock();
        let seen = state.transitions[target as usize];
        while state.transitions[target as usize] == seen {
            self.changed.wait(&mut state);
        }
    }

    /// Like [`wait_for`](Self::wait_for) with a deadline. Returns `false` on timeout.
    pub fn wait_for_timeout(&self, target: Phase, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        let seen = state.transitions[target as usize];
        while state.transitions[target as usize] == seen {
            if self.changed.wait_until(&mut state, deadline).timed_out() {
                return state.transitions[target as usize] != seen;
            }
        }
        true
    }

    /// How many times `phase` has been published.
    pub fn transitions(&self, phase: Phase) -> u64 {
        self.state.lock().transitions[phase as usize]
    }

    /// The most recently published phase, or red if nothing was published.
    pub fn latest(&self) -> Phase {
        self.state.lock().latest
    }
}
