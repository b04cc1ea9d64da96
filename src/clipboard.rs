//! Clipboard sinks.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via copypasta, opened on first write.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard context".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .context()?
            .set_contents(text.to_string())
            .map_err(|e| ClipboardError::Rejected(e.to_string()));
        if result.is_err() {
            // A context that failed once is reopened on the next attempt.
            self.ctx = None;
        }
        result
    }
}

/// In-memory clipboard that records every successful write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes are always rejected.
    pub fn failing(err: ClipboardError) -> Self {
        Self {
            writes: Vec::new(),
            fail_with: Some(err),
        }
    }

    pub fn set_failure(&mut self, err: Option<ClipboardError>) {
        self.fail_with = err;
    }

    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

impl Drop for MemoryClipboard {
    fn drop(&mut self) {
        self.writes.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl<C: ClipboardSink + ?Sized> ClipboardSink for &mut C {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

impl<C: ClipboardSink + ?Sized> ClipboardSink for Box<C> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}
