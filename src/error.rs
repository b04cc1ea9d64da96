//! Error types shared across the widget.

use thiserror::Error;

/// Clipboard sink failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard rejected write: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(#[from] ClipboardError),

    #[error("Settings file error: {0}")]
    Settings(#[source] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
