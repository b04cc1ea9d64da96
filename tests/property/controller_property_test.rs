//! Property-based tests for controller transitions.
//!
//! For any sequence of configuration mutations and copy requests the
//! password stays consistent with the configuration and at most one revert
//! timer is ever armed.

use std::time::Duration;

use livepass::clipboard::MemoryClipboard;
use livepass::controller::{
    CopyFeedback, Defaults, GeneratorController, MAX_LENGTH, MIN_LENGTH,
};
use livepass::rand::SeededRand;
use livepass::timer::{ManualScheduler, Scheduler};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    SetLength(usize),
    ToggleDigits,
    ToggleSymbols,
    Reset,
    Copy,
    Wait(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..64).prop_map(Op::SetLength),
        Just(Op::ToggleDigits),
        Just(Op::ToggleSymbols),
        Just(Op::Reset),
        Just(Op::Copy),
        (0u64..3000).prop_map(Op::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn password_tracks_configuration(
        ops in proptest::collection::vec(op(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut c = GeneratorController::new(
            Defaults::default(),
            SeededRand::new(seed),
            MemoryClipboard::new(),
            ManualScheduler::new(),
        );

        for op in ops {
            match op {
                Op::SetLength(n) => c.set_length(n),
                Op::ToggleDigits => c.toggle_digits(),
                Op::ToggleSymbols => c.toggle_symbols(),
                Op::Reset => {
                    c.reset();
                    prop_assert_eq!(c.config(), Defaults::default().config);
                    prop_assert_eq!(c.feedback(), CopyFeedback::Idle);
                }
                Op::Copy => {
                    c.request_copy().unwrap();
                    prop_assert_eq!(c.feedback(), CopyFeedback::Confirmed);
                }
                Op::Wait(t) => {
                    c.scheduler_mut().advance(Duration::from_millis(t));
                    c.poll_timers();
                }
            }

            let config = c.config();
            prop_assert!((MIN_LENGTH..=MAX_LENGTH).contains(&config.length));
            prop_assert!(config.admits(c.password()));
            prop_assert!(c.scheduler().armed() <= 1);
            prop_assert_eq!(
                c.pending_revert().is_some(),
                c.feedback() == CopyFeedback::Confirmed
            );
        }
    }
}
