use crate::store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Diagnostics raised inside the session manager.
///
/// None of these cross the public `login`/`logout`/accessor boundary; they are
/// recovered locally and logged.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Persisted session under '{key}' is malformed: {message} {location}")]
    MalformedPersistedState {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Login payload rejected: missing {missing} {location}")]
    InvalidLoginPayload {
        missing: &'static str,
        location: ErrorLocation,
    },

    #[error("Session store failure: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Creates MalformedPersistedState error at caller location.
    #[track_caller]
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPersistedState {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidLoginPayload error at caller location.
    #[track_caller]
    pub fn invalid_payload(missing: &'static str) -> Self {
        Self::InvalidLoginPayload {
            missing,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
