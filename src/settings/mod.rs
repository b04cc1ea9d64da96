//! Widget preferences.

mod file;

use std::io;
use std::path::Path;
use std::time::Duration;

use crate::controller::{Configuration, Defaults, clamp_length, DEFAULT_LENGTH};
use crate::theme::Theme;

/// Copy feedback delay of the full widget.
pub const CLASSIC_REVERT_MS: u64 = 2000;
/// Copy feedback delay of the compact widget (`--quick`).
pub const QUICK_REVERT_MS: u64 = 500;
/// Digits default of the full widget.
pub const CLASSIC_DIGITS_DEFAULT: bool = false;
/// Digits default of the compact widget (`--quick`).
pub const QUICK_DIGITS_DEFAULT: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_length: usize,
    pub digits_default: bool,
    pub symbols_default: bool,
    pub revert_delay_ms: u64,
    pub theme: Theme,
}

impl Settings {
    /// Stored preferences, or the defaults when nothing is stored.
    pub fn load_from_file() -> io::Result<Self> {
        match file::get_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Settings::default()),
        }
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> io::Result<()> {
        let path = file::get_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "HOME is not set"))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        file::save(path, self)
    }

    /// Switch to the compact widget's delay and digits default.
    pub fn apply_quick(&mut self) {
        self.revert_delay_ms = QUICK_REVERT_MS;
        self.digits_default = QUICK_DIGITS_DEFAULT;
    }

    /// The reset tuple and feedback delay handed to the controller.
    pub fn defaults(&self) -> Defaults {
        Defaults {
            config: Configuration {
                length: clamp_length(self.default_length),
                digits_enabled: self.digits_default,
                symbols_enabled: self.symbols_default,
            },
            revert_delay: Duration::from_millis(self.revert_delay_ms),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            digits_default: CLASSIC_DIGITS_DEFAULT,
            symbols_default: false,
            revert_delay_ms: CLASSIC_REVERT_MS,
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuple() {
        let d = Settings::default().defaults();
        assert_eq!(d.config, Configuration::new(12, false, false));
        assert_eq!(d.revert_delay, Duration::from_millis(2000));
        assert_eq!(d, Defaults::default());
    }

    #[test]
    fn test_quick_variant() {
        let mut s = Settings::default();
        s.apply_quick();
        let d = s.defaults();
        assert!(d.config.digits_enabled);
        assert_eq!(d.revert_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_load_from_missing_path_is_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings");
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert!(!path.exists());

        let saved = Settings {
            theme: Theme::Light,
            ..Settings::default()
        };
        saved.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), saved);
    }

    #[test]
    fn test_stored_length_is_clamped() {
        let s = Settings {
            default_length: 99,
            ..Default::default()
        };
        assert_eq!(s.defaults().config.length, 32);
    }
}
