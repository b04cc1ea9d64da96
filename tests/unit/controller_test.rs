use std::time::Duration;

use livepass::clipboard::MemoryClipboard;
use livepass::controller::{
    Configuration, ControllerEvent, CopyFeedback, Defaults, GeneratorController,
};
use livepass::error::{ClipboardError, WidgetError};
use livepass::pass::charset;
use livepass::rand::SeededRand;
use livepass::timer::{ManualScheduler, Scheduler};

type Ctl = GeneratorController<SeededRand, MemoryClipboard, ManualScheduler>;

fn controller_with(defaults: Defaults, clipboard: MemoryClipboard) -> Ctl {
    GeneratorController::new(defaults, SeededRand::new(2024), clipboard, ManualScheduler::new())
}

fn controller() -> Ctl {
    controller_with(Defaults::default(), MemoryClipboard::new())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn only_letters(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

#[test]
fn test_walkthrough_from_defaults() {
    let mut c = controller();
    assert_eq!(c.password().len(), 12);
    assert!(only_letters(c.password()));

    c.set_length(32);
    assert_eq!(c.password().len(), 32);
    assert!(only_letters(c.password()));

    c.toggle_symbols();
    assert_eq!(c.password().len(), 32);
    assert!(c.config().symbols_enabled);
    assert!(c.config().admits(c.password()));

    c.reset();
    assert_eq!(c.config(), Configuration::new(12, false, false));
    assert_eq!(c.feedback(), CopyFeedback::Idle);
    assert_eq!(c.password().len(), 12);
    assert!(only_letters(c.password()));
}

#[test]
fn test_set_length_clamps() {
    let mut c = controller();
    c.set_length(3);
    assert_eq!(c.config().length, 8);
    assert_eq!(c.password().len(), 8);

    c.set_length(1000);
    assert_eq!(c.config().length, 32);
    assert_eq!(c.password().len(), 32);
}

#[test]
fn test_toggles_flip_and_regenerate() {
    let mut c = controller();
    c.toggle_digits();
    assert!(c.config().digits_enabled);
    assert!(c.config().admits(c.password()));
    c.toggle_digits();
    assert!(!c.config().digits_enabled);
    assert!(only_letters(c.password()));
}

#[test]
fn test_toggle_changes_charset_membership() {
    // With a long enough run the widened charset shows up in the output.
    let mut c = controller();
    c.set_length(32);
    c.toggle_digits();
    c.toggle_symbols();
    let mut seen_extra = false;
    for _ in 0..50 {
        c.regenerate();
        assert!(c.config().admits(c.password()));
        seen_extra |= c
            .password()
            .bytes()
            .any(|b| charset::DIGITS.contains(&b) || charset::SYMBOLS.contains(&b));
    }
    assert!(seen_extra);
}

#[test]
fn test_reset_uses_post_reset_configuration() {
    let defaults = Defaults {
        config: Configuration::new(16, true, false),
        revert_delay: ms(500),
    };
    let mut c = controller_with(defaults, MemoryClipboard::new());
    c.set_length(30);
    c.toggle_symbols();
    c.toggle_digits();

    c.reset();
    assert_eq!(c.config(), defaults.config);
    assert_eq!(c.password().len(), 16);
    assert!(c.config().admits(c.password()));
    assert!(!c.password().bytes().any(|b| charset::SYMBOLS.contains(&b)));
}

#[test]
fn test_copy_confirms_then_reverts_after_delay() {
    let mut c = controller();
    c.request_copy().unwrap();
    assert_eq!(c.feedback(), CopyFeedback::Confirmed);
    assert_eq!(c.clipboard().contents(), Some(c.password()));

    c.scheduler_mut().advance(ms(1999));
    assert!(!c.poll_timers());
    assert_eq!(c.feedback(), CopyFeedback::Confirmed);

    c.scheduler_mut().advance(ms(1));
    assert!(c.poll_timers());
    assert_eq!(c.feedback(), CopyFeedback::Idle);
    assert_eq!(c.pending_revert(), None);
}

#[test]
fn test_second_copy_restarts_the_clock() {
    let mut c = controller();
    c.request_copy().unwrap();
    let first = c.pending_revert().unwrap();

    c.scheduler_mut().advance(ms(1500));
    c.request_copy().unwrap();
    let second = c.pending_revert().unwrap();
    assert_ne!(first, second);
    assert_eq!(c.scheduler().armed(), 1);

    // the first timer's deadline passes without reverting
    c.scheduler_mut().advance(ms(1000));
    assert!(!c.poll_timers());
    assert_eq!(c.feedback(), CopyFeedback::Confirmed);

    // exactly one revert, 2000ms after the second request
    c.scheduler_mut().advance(ms(1000));
    assert!(c.poll_timers());
    assert_eq!(c.feedback(), CopyFeedback::Idle);

    let reverts = c
        .drain_events()
        .into_iter()
        .filter(|e| *e == ControllerEvent::FeedbackChanged(CopyFeedback::Idle))
        .count();
    assert_eq!(reverts, 1);
}

#[test]
fn test_reset_cancels_pending_revert() {
    let mut c = controller();
    c.request_copy().unwrap();
    c.reset();
    assert_eq!(c.feedback(), CopyFeedback::Idle);
    assert_eq!(c.pending_revert(), None);
    assert_eq!(c.scheduler().armed(), 0);

    c.request_copy().unwrap();
    c.scheduler_mut().advance(ms(2000));
    assert!(c.poll_timers());
}

#[test]
fn test_copy_failure_is_reported_and_label_stays_idle() {
    let mut c = controller_with(
        Defaults::default(),
        MemoryClipboard::failing(ClipboardError::Rejected("permission denied".into())),
    );
    c.drain_events();

    let err = c.request_copy().unwrap_err();
    assert!(matches!(err, WidgetError::ClipboardWriteFailed(_)));
    assert_eq!(c.feedback(), CopyFeedback::Idle);
    assert_eq!(c.pending_revert(), None);
    assert_eq!(
        c.drain_events(),
        vec![ControllerEvent::CopyFailed(
            "clipboard rejected write: permission denied".into()
        )]
    );
}

#[test]
fn test_copy_retry_after_failure() {
    let mut c = controller_with(
        Defaults::default(),
        MemoryClipboard::failing(ClipboardError::Unavailable("no display".into())),
    );
    assert!(c.request_copy().is_err());
    // no retry happens on its own
    assert!(c.clipboard().writes().is_empty());
}

#[test]
fn test_configured_delay_is_used() {
    let defaults = Defaults {
        revert_delay: ms(500),
        ..Defaults::default()
    };
    let mut c = controller_with(defaults, MemoryClipboard::new());
    c.request_copy().unwrap();
    c.scheduler_mut().advance(ms(500));
    assert!(c.poll_timers());
    assert_eq!(c.feedback(), CopyFeedback::Idle);
}

#[test]
fn test_events_follow_transitions() {
    let mut c = controller();
    c.set_length(20);
    c.request_copy().unwrap();
    c.reset();
    assert_eq!(
        c.drain_events(),
        vec![
            ControllerEvent::PasswordChanged,
            ControllerEvent::FeedbackChanged(CopyFeedback::Confirmed),
            ControllerEvent::FeedbackChanged(CopyFeedback::Idle),
            ControllerEvent::PasswordChanged,
        ]
    );
    assert!(c.drain_events().is_empty());
}

#[test]
fn test_seeded_controllers_agree() {
    let a = controller();
    let b = controller();
    assert_eq!(a.password(), b.password());
}
