//! Settings file persistence.
//!
//! The file is only ever written by an explicit save. Loading never creates,
//! repairs or rewrites it.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::theme::Theme;

const FIELDS: usize = 5;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(to_line(settings).as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Overlay the stored preferences onto `settings`. A missing file leaves
/// them untouched; a malformed one is reported and ignored.
pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let line = contents.lines().next().unwrap_or("").trim();
    let mut parsed = settings.clone();
    if parse_line(line, &mut parsed) {
        *settings = parsed;
    } else {
        warn!(path = %path.display(), "malformed settings file ignored, using defaults");
    }
    Ok(())
}

pub(super) fn to_line(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{}\n",
        settings.default_length,
        settings.digits_default,
        settings.symbols_default,
        settings.revert_delay_ms,
        settings.theme.name(),
    )
}

/// Overlay the fields of `line` onto `settings`. Fields that fail to parse
/// keep their current value; a wrong field count rejects the line.
pub(super) fn parse_line(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return false;
    }

    settings.default_length = parts[0].parse().unwrap_or(settings.default_length);
    settings.digits_default = parts[1].parse().unwrap_or(settings.digits_default);
    settings.symbols_default = parts[2].parse().unwrap_or(settings.symbols_default);
    settings.revert_delay_ms = parts[3].parse().unwrap_or(settings.revert_delay_ms);
    settings.theme = Theme::from_name(parts[4]).unwrap_or(settings.theme);
    true
}

/// `$HOME/.config/livepass/settings`, or `None` without a home directory.
pub fn get_path() -> Option<PathBuf> {
    let home = env::var_os("HOME").filter(|h| !h.is_empty())?;
    Some(PathBuf::from(home).join(".config/livepass/settings"))
}
