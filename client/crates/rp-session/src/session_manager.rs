use crate::{
    DEFAULT_SESSION_KEY,
    error::SessionError,
    identity::Identity,
    payload::normalize,
    restoration::Restoration,
    session_state::SessionState,
    store::{KeyValueStore, StoreError},
};

use log::{error, info, warn};
use serde_json::Value;

/// Single source of truth for who is logged in.
///
/// The in-memory [`SessionState`] is read from the store once, at
/// construction, and every transition afterwards is written through to the
/// store before the call returns. Consumers ask the manager; they never read
/// the session key from the store themselves.
#[derive(Debug)]
pub struct SessionManager<S: KeyValueStore> {
    store: S,
    key: String,
    state: SessionState,
    restoration: Restoration,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Restores the session stored under [`DEFAULT_SESSION_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SESSION_KEY)
    }

    /// Restores the session stored under `key`.
    ///
    /// Unreadable, unparseable or incomplete values are removed from the store
    /// and the manager starts anonymous.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (state, restoration) = Self::restore(&store, &key);

        Self {
            store,
            key,
            state,
            restoration,
        }
    }

    fn restore(store: &S, key: &str) -> (SessionState, Restoration) {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (SessionState::Anonymous, Restoration::Empty),
            Err(e) => {
                // Nothing to discard: the value could not even be read.
                error!("{}", SessionError::from(e));
                return (SessionState::Anonymous, Restoration::Empty);
            }
        };

        let reason = match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => match identity.missing_field() {
                None => {
                    info!("Restored session for {}", identity.subject_id);
                    return (SessionState::Authenticated(identity), Restoration::Restored);
                }
                Some(missing) => format!("missing {missing}"),
            },
            Err(e) => e.to_string(),
        };

        warn!("{}", SessionError::malformed(key, reason.as_str()));
        if let Err(e) = store.remove(key) {
            error!("{}", SessionError::from(e));
        }

        (SessionState::Anonymous, Restoration::Discarded { reason })
    }

    /// Replaces the current session with the identity in `payload`.
    ///
    /// Returns `false`, leaving the session untouched, when the payload has no
    /// subject id or credential or the store refuses the write.
    pub fn login(&mut self, payload: &Value) -> bool {
        let identity = match normalize(payload) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("{e}");
                return false;
            }
        };

        let serialized = match serde_json::to_string(&identity) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("{}", SessionError::from(StoreError::from(e)));
                return false;
            }
        };

        if let Err(e) = self.store.set(&self.key, &serialized) {
            error!("{}", SessionError::from(e));
            return false;
        }

        info!("Logged in as {}", identity.subject_id);
        self.state = SessionState::Authenticated(identity);
        true
    }

    /// Clears the session. Always succeeds; the store removal is issued even
    /// when already anonymous.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(identity) = &self.state {
            info!("Logged out {}", identity.subject_id);
        }

        self.state = SessionState::Anonymous;

        if let Err(e) = self.store.remove(&self.key) {
            error!("{}", SessionError::from(e));
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    /// Bearer credential for outgoing requests. Read it per request.
    pub fn credential(&self) -> Option<&str> {
        self.current_identity().map(|i| i.credential.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn restoration(&self) -> &Restoration {
        &self.restoration
    }

    pub fn session_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
