//! File logging. The terminal is in raw mode while playing, so log records
//! go to ~/.flapper/flapper.log instead of stderr.

use crate::utils::persistence;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::PathBuf;

pub const LOG_FILENAME: &str = "flapper.log";

/// Install the global logger. Returns the log path, or `None` when logging
/// could not be set up (the game runs without it).
pub fn init() -> Option<PathBuf> {
    let path = persistence::save_path(LOG_FILENAME).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .ok()?;

    Some(path)
}
