use crate::client::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use rp_config::ConfigError;
use thiserror::Error;

/// Errors surfaced to the user by the `rapport` binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid --data JSON: {source} {location}")]
    InvalidData {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Login response did not contain a user id and token {location}")]
    LoginRejected { location: ErrorLocation },

    #[error("Not logged in {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn invalid_data(source: serde_json::Error) -> Self {
        Self::InvalidData {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login_rejected() -> Self {
        Self::LoginRejected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
