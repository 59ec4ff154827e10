use serde::{Deserialize, Serialize};

/// Canonical authenticated account, as held in memory and persisted.
///
/// Field names on disk are fixed (`subjectId`, `displayName`, `email`,
/// `credential`) regardless of how the login payload spelled them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub subject_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub credential: String,
}

impl Identity {
    pub fn new(
        subject_id: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            display_name: None,
            email: email.into(),
            credential: credential.into(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Both the subject id and the credential must be non-empty.
    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Name of the first required field that is empty, if any.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.subject_id.is_empty() {
            Some("subject id")
        } else if self.credential.is_empty() {
            Some("credential")
        } else {
            None
        }
    }
}
