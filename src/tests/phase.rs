use std::sync::Arc;
use std::thread;

use crate::phase::{AtomicPhase, Phase};

#[test]
fn test_toggled() {
    assert_eq!(Phase::Red.toggled(), Phase::Green);
    assert_eq!(Phase::Green.toggled(), Phase::Red);
    assert_eq!(Phase::default(), Phase::Red);
}

#[test]
fn test_display() {
    assert_eq!(Phase::Red.to_string(), "red");
    assert_eq!(Phase::Green.to_string(), "green");
}

#[test]
fn test_atomic_toggle() {
    let phase = AtomicPhase::new(Phase::Red);

    assert_eq!(phase.toggle(), Phase::Green);
    assert_eq!(phase.load(), Phase::Green);
    assert_eq!(phase.toggle(), Phase::Red);
    assert_eq!(phase.load(), Phase::Red);

    phase.store(Phase::Green);
    assert_eq!(phase.load(), Phase::Green);
}

#[test]
fn test_concurrent_toggles_are_not_lost() {
    let phase = Arc::new(AtomicPhase::new(Phase::Red));

    let writers = (0..4)
        .map(|_| {
            let phase = phase.clone();
            thread::spawn(move || {
                for _ in 0..1_001 {
                    phase.toggle();
                }
            })
        })
        .collect::<Vec<_>>();

    for writer in writers {
        writer.join().expect("writer panicked");
    }

    // 4 * 1001 toggles is even; an odd number of lost updates would leave it green
    assert_eq!(phase.load(), Phase::Red);
}
