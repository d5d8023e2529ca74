//! Top-level error type for the binary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlapperError {
    /// The terminal could not be set up or stopped responding. Fatal.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("could not write {path}: {source}")]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown preset '{0}' (expected 'classic' or 'relaxed')")]
    UnknownPreset(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}
