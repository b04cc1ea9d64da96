//! Generation parameters and copy feedback state.

use std::fmt;
use std::time::Duration;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// User-controlled generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub length: usize,
    pub digits_enabled: bool,
    pub symbols_enabled: bool,
}

impl Configuration {
    /// Build a configuration, clamping `length` into the slider domain.
    pub fn new(length: usize, digits_enabled: bool, symbols_enabled: bool) -> Self {
        Self {
            length: clamp_length(length),
            digits_enabled,
            symbols_enabled,
        }
    }

    /// Whether `password` could have been produced from this configuration.
    pub fn admits(&self, password: &str) -> bool {
        password.chars().count() == self.length
            && password
                .chars()
                .all(|c| crate::pass::charset::contains(c, self.digits_enabled, self.symbols_enabled))
    }

    pub fn charset_size(&self) -> usize {
        crate::pass::charset::size(self.digits_enabled, self.symbols_enabled)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            digits_enabled: false,
            symbols_enabled: false,
        }
    }
}

/// Clamp a requested length to `[MIN_LENGTH, MAX_LENGTH]`.
pub fn clamp_length(n: usize) -> usize {
    n.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Label state of the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Confirmed,
}

impl CopyFeedback {
    pub fn label(self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Confirmed => "Copied!",
        }
    }
}

impl fmt::Display for CopyFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The reset tuple and the copy feedback delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub config: Configuration,
    pub revert_delay: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            config: Configuration::default(),
            revert_delay: Duration::from_millis(crate::settings::CLASSIC_REVERT_MS),
        }
    }
}

/// Notifications pushed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    PasswordChanged,
    FeedbackChanged(CopyFeedback),
    CopyFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(0), 8);
        assert_eq!(clamp_length(7), 8);
        assert_eq!(clamp_length(8), 8);
        assert_eq!(clamp_length(20), 20);
        assert_eq!(clamp_length(32), 32);
        assert_eq!(clamp_length(33), 32);
        assert_eq!(clamp_length(usize::MAX), 32);
    }

    #[test]
    fn test_admits() {
        let c = Configuration::new(8, false, false);
        assert!(c.admits("abcdEFGH"));
        assert!(!c.admits("abcdEFG1"));
        assert!(!c.admits("abcdEFG"));
        let c = Configuration::new(8, true, true);
        assert!(c.admits("ab1!EF?9"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CopyFeedback::default(), CopyFeedback::Idle);
        assert_eq!(CopyFeedback::Idle.to_string(), "Copy");
        assert_eq!(CopyFeedback::Confirmed.to_string(), "Copied!");
    }
}
