//! CLI context - bundles settings and flags, then dispatches.

use tracing::{debug, warn};

use super::{CliFlags, print_help, prompts};
use crate::clipboard::SystemClipboard;
use crate::controller::GeneratorController;
use crate::error::WidgetError;
use crate::rand::{self, RandomSource, SeededRand, ThreadRand};
use crate::settings::Settings;
use crate::theme::Theme;
use crate::timer::TimerQueue;
use crate::tui::{self, App};

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for one run.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            warn!(error = %e, "settings not loaded");
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_save();

        let result = if self.flags.print {
            self.print_once()
        } else {
            self.interactive()
        };

        if let Err(e) = result {
            prompts::error(&e.to_string());
            return Err(Done);
        }
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("livepass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Overlay CLI flags onto the loaded settings.
    pub fn apply_flags(&mut self) {
        if self.flags.quick {
            self.settings.apply_quick();
        }
        if let Some(len) = self.flags.length {
            self.settings.default_length = len;
        }
        if let Some(digits) = self.flags.digits {
            self.settings.digits_default = digits;
        }
        if let Some(symbols) = self.flags.symbols {
            self.settings.symbols_default = symbols;
        }
        if let Some(ms) = self.flags.delay_ms {
            self.settings.revert_delay_ms = ms;
        }
        if let Some(theme) = self.flags.theme {
            self.settings.theme = theme;
        }
        debug!(settings = ?self.settings, "flags applied");
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        if !self.flags.has_preferences() {
            prompts::warn("Nothing to save: pass the preferences to store alongside --save.");
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&WidgetError::Settings(e).to_string()),
        }
    }

    fn random_source(&self) -> Box<dyn RandomSource> {
        match self.flags.seed {
            Some(seed) => Box::new(SeededRand::new(seed)),
            None => Box::new(ThreadRand::new()),
        }
    }

    fn print_once(&self) -> Result<(), WidgetError> {
        let mut controller = GeneratorController::new(
            self.settings.defaults(),
            self.random_source(),
            SystemClipboard::new(),
            TimerQueue::new(),
        );

        if self.flags.clipboard {
            controller.request_copy()?;
            prompts::clipboard_copied();
        } else {
            println!("{}", controller.password());
        }
        Ok(())
    }

    fn interactive(&mut self) -> Result<(), WidgetError> {
        let controller = GeneratorController::new(
            self.settings.defaults(),
            self.random_source(),
            SystemClipboard::new(),
            TimerQueue::new(),
        );
        let app = App::new(controller, self.settings.theme, rand::source_name(self.flags.seed));
        let theme = tui::run(app)?;
        if self.adopt_theme(theme) {
            self.settings.save_to_file().map_err(WidgetError::Settings)?;
        }
        Ok(())
    }

    /// Take the theme the widget closed with. Returns true when it changed
    /// under `--save` and should be written back.
    fn adopt_theme(&mut self, theme: Theme) -> bool {
        if theme == self.settings.theme {
            return false;
        }
        self.settings.theme = theme;
        self.flags.save && self.flags.has_preferences()
    }
}
