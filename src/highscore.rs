//! High-score persistence.
//!
//! The record is a single plain decimal integer, overwritten in full on every
//! save. Loading never fails: anything unreadable counts as 0.

use crate::utils::persistence;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the record inside ~/.flapper/.
pub const HIGHSCORE_FILENAME: &str = "highscore";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the high score lives between processes.
pub trait HighScoreStore {
    /// Stored value, or 0 when missing or unreadable.
    fn load(&self) -> u32;
    /// Overwrite the stored value.
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Plain-text file store.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at ~/.flapper/highscore.
    pub fn in_data_dir() -> io::Result<Self> {
        Ok(Self::new(persistence::save_path(HIGHSCORE_FILENAME)?))
    }
}

/// Parse a stored record; surrounding whitespace is allowed.
pub fn parse_record(contents: &str) -> Option<u32> {
    contents.trim().parse::<u32>().ok()
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_record(&contents).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring corrupt high score file {}",
                    self.path.display()
                );
                0
            }),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("Could not read {}: {}", self.path.display(), e);
                }
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Process-local store, used when no data directory exists and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    value: u32,
    /// Every value passed to a successful `save`, oldest first.
    pub saves: Vec<u32>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.value = score;
        self.saves.push(score);
        Ok(())
    }
}

/// Store whose writes always fail; reads return a fixed value.
#[cfg(test)]
pub(crate) struct FailingStore(pub u32);

#[cfg(test)]
impl HighScoreStore for FailingStore {
    fn load(&self) -> u32 {
        self.0
    }

    fn save(&mut self, _score: u32) -> Result<(), StoreError> {
        Err(StoreError::Write {
            path: PathBuf::from(HIGHSCORE_FILENAME),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
