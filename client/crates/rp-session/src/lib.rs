//! Client-side session state for the rapport content client.
//!
//! A [`SessionManager`] owns the one current [`Identity`] (or none) and mirrors
//! it write-through into a [`KeyValueStore`] under a fixed key, so the login
//! survives process restarts.

pub mod error;
pub mod identity;
pub mod payload;
pub mod restoration;
pub mod session_manager;
pub mod session_state;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{Result as SessionResult, SessionError};
pub use identity::Identity;
pub use payload::{
    CREDENTIAL_FIELDS, DISPLAY_NAME_FIELDS, EMAIL_FIELD, SUBJECT_ID_FIELDS, normalize,
};
pub use restoration::Restoration;
pub use session_manager::SessionManager;
pub use session_state::SessionState;
pub use store::{
    FileStore, KeyValueStore, MemoryStore, StoreError, StoreErrorResult, StoreStep,
};

/// Durable-store key holding the serialized identity.
pub const DEFAULT_SESSION_KEY: &str = "user";
