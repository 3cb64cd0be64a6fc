use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

const APP_DIR_NAME: &str = "tile-snake";
const LOG_FILE_NAME: &str = "tile-snake.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes the `log` macros to `path`, truncating any previous log.
///
/// The terminal is owned by the game while it runs, so nothing is logged to
/// stdout or stderr. `LevelFilter::Off` skips creating the file.
pub fn init(path: &Path, level: LevelFilter) -> io::Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error.to_string()))
}
