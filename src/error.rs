//! Crate error types.
//!
//! Load failures and programmer errors are reported through [`Error`].
//! Expected booking conflicts are not errors: the assignment operations
//! return `false` for those.

use thiserror::Error;

use crate::config::ConfigError;
use crate::models::SlotKey;
use crate::validation::ValidationError;

/// Broad error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected while building a session.
    Validation,
    /// A file could not be read or written.
    Io,
    /// Configuration could not be loaded.
    Config,
    /// An assignment operation was misused by the caller.
    Schedule,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed session input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) | Error::Json(_) => ErrorKind::Validation,
            Error::Io(_) => ErrorKind::Io,
            Error::Config(_) => ErrorKind::Config,
            Error::Schedule(_) => ErrorKind::Schedule,
        }
    }
}

/// Misuse of an assignment operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("course '{course}' is not assigned to slot {slot}")]
    SlotNotAssigned { course: String, slot: SlotKey },
}

pub type Result<T> = std::result::Result<T, Error>;
