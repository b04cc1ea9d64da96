//! One-shot timers for transient UI state.
//!
//! The controller never runs callbacks itself. It arms a timer, remembers the
//! handle, and the event loop later reports which handles have expired.

use std::time::{Duration, Instant};

/// Opaque id of an armed timer. Ids are never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Arm a timer firing once after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm a timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Remove and return every timer whose deadline has passed, oldest first.
    fn expired(&mut self) -> Vec<TimerHandle>;

    /// Time left until the earliest armed timer fires.
    fn next_deadline(&self) -> Option<Duration>;

    /// Number of armed timers.
    fn armed(&self) -> usize;
}

// =============================================================================
// Wall clock
// =============================================================================

/// Scheduler backed by `Instant`, used by the terminal event loop.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    timers: Vec<(TimerHandle, Instant)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn expired_at(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut due: Vec<(TimerHandle, Instant)> = Vec::new();
        self.timers.retain(|&(h, at)| {
            if at <= now {
                due.push((h, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(h, at)| (at, h));
        due.into_iter().map(|(h, _)| h).collect()
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|&(h, _)| h != handle);
    }

    fn expired(&mut self) -> Vec<TimerHandle> {
        self.expired_at(Instant::now())
    }

    fn next_deadline(&self) -> Option<Duration> {
        let now = Instant::now();
        self.timers
            .iter()
            .map(|&(_, at)| at.saturating_duration_since(now))
            .min()
    }

    fn armed(&self) -> usize {
        self.timers.len()
    }
}

// =============================================================================
// Virtual clock
// =============================================================================

/// Scheduler driven by explicit `advance` calls, for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    now: Duration,
    timers: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the virtual clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|&(h, _)| h != handle);
    }

    fn expired(&mut self) -> Vec<TimerHandle> {
        let now = self.now;
        let mut due: Vec<(TimerHandle, Duration)> =
            self.timers.iter().copied().filter(|&(_, at)| at <= now).collect();
        self.timers.retain(|&(_, at)| at > now);
        due.sort_by_key(|&(h, at)| (at, h));
        due.into_iter().map(|(h, _)| h).collect()
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|&(_, at)| at.saturating_sub(self.now))
            .min()
    }

    fn armed(&self) -> usize {
        self.timers.len()
    }
}
