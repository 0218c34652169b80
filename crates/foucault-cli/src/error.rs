//! Error type for the command-line front end.

use std::io;

use foucault::TrajectoryError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `foucault` commands.
#[derive(Error, Debug)]
pub enum Error {
    /// Settings could not be loaded or resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The model rejected a request, typically a frame past the last sample.
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for the command-line front end.
pub type Result<T> = std::result::Result<T, Error>;
