//! Livepass: a live password generator widget for the terminal.
//!
//! The password is regenerated synchronously on every change to length,
//! digits or symbols, and can be copied with a transient "Copied!" label.

pub mod cli;
pub mod clipboard;
pub mod controller;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod theme;
pub mod timer;
pub mod tui;

pub use controller::{Configuration, CopyFeedback, GeneratorController};
pub use error::{ClipboardError, WidgetError};
