use crate::tests::FlakyStore;
use crate::{
    DEFAULT_SESSION_KEY, Identity, KeyValueStore, MemoryStore, Restoration, SessionManager,
    SessionState,
};

use googletest::assert_that;
use googletest::prelude::{eq, none};
use serde_json::json;

fn stored(store: &MemoryStore) -> Option<String> {
    store.get(DEFAULT_SESSION_KEY).unwrap()
}

// =========================================================================
// Startup restoration
// =========================================================================

#[test]
fn given_empty_store_when_initialize_then_anonymous() {
    let store = MemoryStore::new();

    let session = SessionManager::new(&store);

    assert_that!(session.current_identity(), none());
    assert_eq!(session.restoration(), &Restoration::Empty);
}

#[test]
fn given_valid_persisted_identity_when_initialize_then_authenticated_without_store_write() {
    let store = MemoryStore::new();
    let raw = r#"{"subjectId":"42","email":"x@y.com","credential":"abc"}"#;
    store.set(DEFAULT_SESSION_KEY, raw).unwrap();

    let session = SessionManager::new(&store);

    assert_eq!(
        session.current_identity(),
        Some(&Identity::new("42", "x@y.com", "abc"))
    );
    assert_eq!(session.restoration(), &Restoration::Restored);
    assert_eq!(stored(&store).as_deref(), Some(raw));
}

#[test]
fn given_non_json_persisted_value_when_initialize_then_anonymous_and_key_removed() {
    let store = MemoryStore::new();
    store.set(DEFAULT_SESSION_KEY, "not json at all").unwrap();

    let session = SessionManager::new(&store);

    assert!(!session.is_authenticated());
    assert_that!(stored(&store), none());
    assert!(matches!(
        session.restoration(),
        Restoration::Discarded { .. }
    ));
}

#[test]
fn given_persisted_identity_without_credential_when_initialize_then_discarded() {
    let store = MemoryStore::new();
    store
        .set(DEFAULT_SESSION_KEY, r#"{"subjectId":"42","email":"x@y.com"}"#)
        .unwrap();

    let session = SessionManager::new(&store);

    assert!(!session.is_authenticated());
    assert_that!(stored(&store), none());
    assert_eq!(
        session.restoration(),
        &Restoration::Discarded {
            reason: String::from("missing credential")
        }
    );
}

#[test]
fn given_persisted_identity_without_subject_id_when_initialize_then_discarded() {
    let store = MemoryStore::new();
    store
        .set(DEFAULT_SESSION_KEY, r#"{"email":"x@y.com","credential":"abc"}"#)
        .unwrap();

    let session = SessionManager::new(&store);

    assert!(!session.is_authenticated());
    assert_that!(stored(&store), none());
}

#[test]
fn given_persisted_json_array_when_initialize_then_discarded() {
    let store = MemoryStore::new();
    store.set(DEFAULT_SESSION_KEY, "[1,2,3]").unwrap();

    let session = SessionManager::new(&store);

    assert!(!session.is_authenticated());
    assert_that!(stored(&store), none());
}

#[test]
fn given_custom_key_when_initialize_then_only_that_key_is_read() {
    let store = MemoryStore::new();
    store
        .set(DEFAULT_SESSION_KEY, r#"{"subjectId":"1","credential":"a"}"#)
        .unwrap();

    let session = SessionManager::with_key(&store, "session");

    assert!(!session.is_authenticated());
    assert_that!(session.session_key(), eq("session"));
}

// =========================================================================
// Login
// =========================================================================

#[test]
fn given_valid_payload_when_login_then_identity_and_store_match() {
    let store = MemoryStore::new();
    let mut session = SessionManager::new(&store);

    let accepted = session.login(&json!({"_id": "42", "email": "x@y.com", "token": "abc"}));

    assert!(accepted);
    let expected = Identity::new("42", "x@y.com", "abc");
    assert_eq!(session.current_identity(), Some(&expected));
    let persisted: Identity = serde_json::from_str(&stored(&store).unwrap()).unwrap();
    assert_eq!(persisted, expected);
}

#[test]
fn given_empty_payload_when_login_then_rejected_and_state_unchanged() {
    let store = MemoryStore::new();
    let mut session = SessionManager::new(&store);

    assert!(!session.login(&json!({})));
    assert!(!session.login(&json!({"email": "a@b.com"})));

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(store.is_empty());
}

#[test]
fn given_authenticated_when_invalid_login_then_previous_identity_kept() {
    let store = MemoryStore::new();
    let mut session = SessionManager::new(&store);
    session.login(&json!({"_id": "1", "token": "first"}));
    let before = stored(&store);

    let accepted = session.login(&json!({"email": "a@b.com"}));

    assert!(!accepted);
    assert_eq!(session.credential(), Some("first"));
    assert_eq!(stored(&store), before);
}

#[test]
fn given_authenticated_when_login_again_then_fully_replaced() {
    let store = MemoryStore::new();
    let mut session = SessionManager::new(&store);
    session.login(&json!({"_id": "1", "username": "sam", "email": "a@b.com", "token": "t1"}));

    session.login(&json!({"id": "2", "token": "t2"}));

    let identity = session.current_identity().unwrap();
    assert_that!(identity.subject_id.as_str(), eq("2"));
    assert!(identity.display_name.is_none());
    assert_that!(identity.email.as_str(), eq(""));
    let persisted: Identity = serde_json::from_str(&stored(&store).unwrap()).unwrap();
    assert_eq!(&persisted, identity);
}

#[test]
fn given_store_write_fails_when_login_then_rejected_and_state_unchanged() {
    let store = FlakyStore::default();
    let mut session = SessionManager::new(&store);
    store.fail_writes.set(true);

    let accepted = session.login(&json!({"_id": "1", "token": "t"}));

    assert!(!accepted);
    assert!(!session.is_authenticated());
    assert_that!(store.get(DEFAULT_SESSION_KEY).unwrap(), none());
}

// =========================================================================
// Logout
// =========================================================================

#[test]
fn given_authenticated_when_logout_then_anonymous_and_key_removed() {
    let store = MemoryStore::new();
    let mut session = SessionManager::new(&store);
    session.login(&json!({"_id": "1", "token": "t"}));

    session.logout();

    assert_that!(session.current_identity(), none());
    assert_that!(session.credential(), none());
    assert_that!(stored(&store), none());
}

#[test]
fn given_anonymous_when_logout_then_noop() {
    let store = MemoryStore::new();
    store.set("other", "kept").unwrap();
    let mut session = SessionManager::new(&store);

    session.logout();
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
}

#[test]
fn given_store_removal_fails_when_logout_then_still_anonymous() {
    let store = FlakyStore::default();
    let mut session = SessionManager::new(&store);
    session.login(&json!({"_id": "1", "token": "t"}));
    store.fail_writes.set(true);

    session.logout();

    assert!(!session.is_authenticated());
}

// =========================================================================
// Restart and end-to-end
// =========================================================================

#[test]
fn given_login_when_reinitialize_against_same_store_then_identity_restored() {
    let store = MemoryStore::new();
    let payload = json!({"_id": "42", "username": "sam", "email": "x@y.com", "token": "abc"});
    let expected = {
        let mut session = SessionManager::new(&store);
        assert!(session.login(&payload));
        session.current_identity().cloned()
    };

    let restarted = SessionManager::new(&store);

    assert_eq!(restarted.current_identity().cloned(), expected);
    assert_eq!(restarted.restoration(), &Restoration::Restored);
}

#[test]
fn given_logout_when_reinitialize_then_anonymous() {
    let store = MemoryStore::new();
    {
        let mut session = SessionManager::new(&store);
        session.login(&json!({"_id": "1", "token": "t"}));
        session.logout();
    }

    let restarted = SessionManager::new(&store);

    assert!(!restarted.is_authenticated());
    assert_eq!(restarted.restoration(), &Restoration::Empty);
}

#[test]
fn given_empty_store_when_full_session_lifecycle_then_each_step_observable() {
    let store = MemoryStore::new();
    let mut session = SessionManager::new(&store);
    assert_that!(session.current_identity(), none());

    session.login(&json!({"_id": "42", "email": "x@y.com", "token": "abc"}));
    assert_eq!(
        session.current_identity(),
        Some(&Identity::new("42", "x@y.com", "abc"))
    );
    assert_eq!(session.credential(), Some("abc"));

    session.logout();
    assert_that!(session.current_identity(), none());
    assert_that!(stored(&store), none());
}

#[test]
fn given_owned_store_when_into_store_then_state_survives_restart() {
    let mut session = SessionManager::new(MemoryStore::new());
    session.login(&json!({"id": "7", "token": "t"}));

    let restarted = SessionManager::new(session.into_store());

    assert_eq!(restarted.credential(), Some("t"));
}
