use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Filesystem step a [`FileStore`](crate::FileStore) was performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStep {
    Read,
    CreateDir,
    Write,
    Replace,
    Quarantine,
}

impl fmt::Display for StoreStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::CreateDir => "create directory",
            Self::Write => "write",
            Self::Replace => "replace",
            Self::Quarantine => "move aside",
        })
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session store could not {step} {path}: {source} {location}")]
    Io {
        step: StoreStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Session entries could not be encoded: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn io(step: StoreStep, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            step,
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn step(&self) -> Option<StoreStep> {
        match self {
            Self::Io { step, .. } => Some(*step),
            Self::Encode { .. } => None,
        }
    }

    /// What the user can do about it.
    pub fn recovery_hint(&self) -> &'static str {
        match self.step() {
            Some(StoreStep::Read) => "Check that the storage file is a readable file.",
            Some(StoreStep::CreateDir | StoreStep::Write | StoreStep::Replace) => {
                "Check free space and permissions of the rapport data directory."
            }
            Some(StoreStep::Quarantine) => {
                "Move the unreadable storage file away by hand, then log in again."
            }
            None => "Session data could not be encoded; log in again.",
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
