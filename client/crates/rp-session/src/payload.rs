//! Normalization of loosely-shaped login payloads.
//!
//! The auth API has spelled the same fields differently over time (`_id` vs
//! `id`, `username` vs `name`). Each canonical field lists the raw keys it
//! accepts, in precedence order: the first key holding a non-empty value wins.
//! The canonical spelling is accepted last so a serialized [`Identity`] is
//! itself a valid payload.

use crate::error::{Result as SessionResult, SessionError};
use crate::identity::Identity;

use serde_json::{Map, Value};

/// Accepted keys for the subject id, in precedence order.
pub const SUBJECT_ID_FIELDS: [&str; 3] = ["_id", "id", "subjectId"];
/// Accepted keys for the display name, in precedence order.
pub const DISPLAY_NAME_FIELDS: [&str; 3] = ["username", "name", "displayName"];
/// Accepted keys for the bearer credential, in precedence order.
pub const CREDENTIAL_FIELDS: [&str; 2] = ["token", "credential"];
pub const EMAIL_FIELD: &str = "email";

/// Builds the canonical [`Identity`] from a raw login payload.
///
/// Fails with [`SessionError::InvalidLoginPayload`] when the payload is not a
/// JSON object or lacks a subject id or credential.
#[track_caller]
pub fn normalize(payload: &Value) -> SessionResult<Identity> {
    let Some(fields) = payload.as_object() else {
        return Err(SessionError::invalid_payload("object payload"));
    };

    let identity = Identity {
        subject_id: first_identifier(fields, &SUBJECT_ID_FIELDS).unwrap_or_default(),
        display_name: first_text(fields, &DISPLAY_NAME_FIELDS),
        email: first_text(fields, &[EMAIL_FIELD]).unwrap_or_default(),
        credential: first_text(fields, &CREDENTIAL_FIELDS).unwrap_or_default(),
    };

    match identity.missing_field() {
        Some(missing) => Err(SessionError::invalid_payload(missing)),
        None => Ok(identity),
    }
}

fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
}

/// Like [`first_text`], but integral ids are accepted and rendered in decimal.
fn first_identifier(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            _ => None,
        })
}
