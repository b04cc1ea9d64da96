//! Interactive terminal widget.

mod glow;
mod input;
mod paint;
pub mod view;

use std::io;
use std::time::Duration;

use crossterm::event;
use tracing::{debug, info};

pub use glow::Glow;
pub use input::{Action, map_event};

use crate::clipboard::ClipboardSink;
use crate::controller::{ControllerEvent, GeneratorController};
use crate::error::WidgetError;
use crate::rand::RandomSource;
use crate::theme::Theme;
use crate::timer::Scheduler;
use view::ViewModel;

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Widget state: the controller plus presentation-only state.
pub struct App<R, C, S> {
    pub controller: GeneratorController<R, C, S>,
    pub theme: Theme,
    pub glow: Glow,
    pub status: Option<String>,
    source: String,
    dirty: bool,
}

impl<R, C, S> App<R, C, S>
where
    R: RandomSource,
    C: ClipboardSink,
    S: Scheduler,
{
    pub fn new(controller: GeneratorController<R, C, S>, theme: Theme, source: String) -> Self {
        Self {
            controller,
            theme,
            glow: Glow::new(),
            status: None,
            source,
            dirty: true,
        }
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::LengthBy(delta) => {
                let length = self.controller.config().length as i64 + delta;
                self.controller.set_length(length.max(0) as usize);
            }
            Action::LengthTo(n) => {
                if n != self.controller.config().length {
                    self.controller.set_length(n);
                }
            }
            Action::ToggleDigits => self.controller.toggle_digits(),
            Action::ToggleSymbols => self.controller.toggle_symbols(),
            Action::Regenerate => self.controller.regenerate(),
            Action::Reset => {
                self.controller.reset();
                self.status = None;
            }
            Action::Copy => match self.controller.request_copy() {
                Ok(()) => self.status = None,
                Err(e) => self.status = Some(e.to_string()),
            },
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = self.theme.name(), "theme toggled");
                self.dirty = true;
            }
            Action::Pointer(column, row) => self.dirty |= self.glow.track(column, row),
            Action::PointerLeft => {
                self.dirty |= self.glow.pointer().is_some();
                self.glow.clear();
            }
            Action::Redraw => self.dirty = true,
        }
        Flow::Continue
    }

    /// Fire due timers and fold controller notifications into `dirty`.
    pub fn tick(&mut self) {
        self.controller.poll_timers();
        for ev in self.controller.drain_events() {
            if let ControllerEvent::FeedbackChanged(feedback) = ev {
                debug!(label = feedback.label(), "feedback changed");
            }
            self.dirty = true;
        }
    }

    /// Whether the next paint would differ from the last one.
    pub fn needs_paint(&self) -> bool {
        self.dirty
    }

    pub fn view(&self) -> ViewModel<'_> {
        ViewModel {
            config: self.controller.config(),
            password: self.controller.password(),
            feedback: self.controller.feedback(),
            source: &self.source,
            status: self.status.as_deref(),
        }
    }

    fn paint<W: io::Write>(&mut self, out: &mut W) -> io::Result<()> {
        let lines = view::frame(&self.view());
        paint::paint(out, &lines, self.theme.palette(), &self.glow)?;
        self.dirty = false;
        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        self.controller
            .next_deadline()
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL))
    }
}

/// Run TUI interactive mode until the user quits. Returns the final theme.
pub fn run<R, C, S>(mut app: App<R, C, S>) -> Result<Theme, WidgetError>
where
    R: RandomSource,
    C: ClipboardSink,
    S: Scheduler,
{
    let _screen = crate::terminal::ScreenGuard::new()?;
    let mut out = io::stdout();
    info!("widget started");

    loop {
        app.tick();
        if app.needs_paint() {
            app.paint(&mut out)?;
        }

        if event::poll(app.poll_timeout())? {
            let ev = event::read()?;
            if let Some(action) = map_event(&ev)
                && app.apply(action) == Flow::Quit
            {
                break;
            }
        }
    }

    info!("widget closed");
    Ok(app.theme)
}
