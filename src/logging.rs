//! Tracing subscriber setup.
//!
//! Logs are off unless `LIVEPASS_LOG` is set. The widget draws on the
//! terminal, so when stderr is a terminal the log goes to a file instead:
//! `LIVEPASS_LOG_FILE` if set, otherwise `livepass.log` in the temp dir.

use std::env;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LIVEPASS_LOG";
pub const LOG_FILE_ENV: &str = "LIVEPASS_LOG_FILE";

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
}

/// Where log lines go. `None` means stderr.
pub fn log_path(explicit: Option<OsString>, stderr_is_terminal: bool) -> Option<PathBuf> {
    match explicit.filter(|p| !p.is_empty()) {
        Some(path) => Some(PathBuf::from(path)),
        None if stderr_is_terminal => Some(env::temp_dir().join("livepass.log")),
        None => None,
    }
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn init() {
    if env::var_os(LOG_ENV).is_none() {
        return;
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false);

    let file = log_path(env::var_os(LOG_FILE_ENV), io::stderr().is_terminal())
        .and_then(|path| open_log(&path).ok());

    let _ = match file {
        Some(file) => builder.with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(io::stderr).try_init(),
    };
}
