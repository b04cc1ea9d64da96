//! Stateful coordinator between the generation parameters and the password.
//!
//! Every mutation regenerates synchronously before returning, so the password
//! observed after any call was produced from the configuration observed after
//! that call. Copy feedback reverts through a single owned timer handle.

mod state;

use std::mem;
use std::time::Duration;

use tracing::{debug, warn};
use zeroize::Zeroize;

pub use state::{
    Configuration, ControllerEvent, CopyFeedback, DEFAULT_LENGTH, Defaults, MAX_LENGTH,
    MIN_LENGTH, clamp_length,
};

use crate::clipboard::ClipboardSink;
use crate::error::WidgetError;
use crate::pass;
use crate::rand::RandomSource;
use crate::timer::{Scheduler, TimerHandle};

pub struct GeneratorController<R, C, S> {
    defaults: Defaults,
    config: Configuration,
    password: String,
    feedback: CopyFeedback,
    revert: Option<TimerHandle>,
    rng: R,
    clipboard: C,
    timers: S,
    events: Vec<ControllerEvent>,
}

impl<R, C, S> GeneratorController<R, C, S>
where
    R: RandomSource,
    C: ClipboardSink,
    S: Scheduler,
{
    /// Start from `defaults` and generate the first password.
    pub fn new(defaults: Defaults, rng: R, clipboard: C, timers: S) -> Self {
        let defaults = Defaults {
            config: Configuration::new(
                defaults.config.length,
                defaults.config.digits_enabled,
                defaults.config.symbols_enabled,
            ),
            ..defaults
        };
        let mut controller = Self {
            defaults,
            config: defaults.config,
            password: String::new(),
            feedback: CopyFeedback::Idle,
            revert: None,
            rng,
            clipboard,
            timers,
            events: Vec::new(),
        };
        controller.regenerate();
        controller.events.clear();
        controller
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn config(&self) -> Configuration {
        self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn feedback(&self) -> CopyFeedback {
        self.feedback
    }

    pub fn defaults(&self) -> Defaults {
        self.defaults
    }

    /// Handle of the armed revert timer, if any.
    pub fn pending_revert(&self) -> Option<TimerHandle> {
        self.revert
    }

    /// Time until the next timer the controller is waiting on.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Take the notifications produced since the last call.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        mem::take(&mut self.events)
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn scheduler(&self) -> &S {
        &self.timers
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.timers
    }

    // =========================================================================
    // Configuration transitions
    // =========================================================================

    pub fn set_length(&mut self, n: usize) {
        let length = clamp_length(n);
        if length != n {
            debug!(requested = n, applied = length, "length clamped");
        }
        self.config.length = length;
        self.regenerate();
    }

    pub fn toggle_digits(&mut self) {
        self.config.digits_enabled = !self.config.digits_enabled;
        self.regenerate();
    }

    pub fn toggle_symbols(&mut self) {
        self.config.symbols_enabled = !self.config.symbols_enabled;
        self.regenerate();
    }

    /// Restore the default tuple, drop copy feedback, regenerate.
    pub fn reset(&mut self) {
        self.cancel_revert();
        self.config = self.defaults.config;
        self.set_feedback(CopyFeedback::Idle);
        self.regenerate();
    }

    /// Replace the password with a fresh draw from the current configuration.
    pub fn regenerate(&mut self) {
        let mut next = pass::generate(
            self.config.length,
            self.config.digits_enabled,
            self.config.symbols_enabled,
            &mut self.rng,
        );
        mem::swap(&mut self.password, &mut next);
        next.zeroize();
        debug!(
            length = self.config.length,
            digits = self.config.digits_enabled,
            symbols = self.config.symbols_enabled,
            "password regenerated"
        );
        self.events.push(ControllerEvent::PasswordChanged);
    }

    // =========================================================================
    // Copy feedback
    // =========================================================================

    /// Copy the current password and show the confirmation label.
    ///
    /// On failure the label is left untouched and a `CopyFailed` event is
    /// queued alongside the returned error.
    pub fn request_copy(&mut self) -> Result<(), WidgetError> {
        if let Err(e) = self.clipboard.write_text(&self.password) {
            warn!(error = %e, "clipboard write failed");
            self.events.push(ControllerEvent::CopyFailed(e.to_string()));
            return Err(e.into());
        }

        self.cancel_revert();
        self.revert = Some(self.timers.schedule_once(self.defaults.revert_delay));
        self.set_feedback(CopyFeedback::Confirmed);
        debug!(delay_ms = self.defaults.revert_delay.as_millis() as u64, "copied");
        Ok(())
    }

    /// Apply expired timers. Returns true if the feedback label changed.
    pub fn poll_timers(&mut self) -> bool {
        let mut changed = false;
        for handle in self.timers.expired() {
            if self.revert == Some(handle) {
                self.revert = None;
                changed |= self.set_feedback(CopyFeedback::Idle);
            } else {
                debug!(handle = handle.id(), "stale timer ignored");
            }
        }
        changed
    }

    fn cancel_revert(&mut self) {
        if let Some(handle) = self.revert.take() {
            self.timers.cancel(handle);
        }
    }

    fn set_feedback(&mut self, feedback: CopyFeedback) -> bool {
        if self.feedback == feedback {
            return false;
        }
        self.feedback = feedback;
        self.events.push(ControllerEvent::FeedbackChanged(feedback));
        true
    }
}

impl<R, C, S> Drop for GeneratorController<R, C, S> {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
