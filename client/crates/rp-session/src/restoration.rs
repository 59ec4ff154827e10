use serde::Serialize;

/// What happened when the session was restored from the durable store.
///
/// Distinguishes "nothing stored" from "stored but thrown away".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Restoration {
    /// Key absent (first launch, or after logout).
    Empty,
    /// A valid identity was loaded.
    Restored,
    /// A value was present but unusable and has been removed.
    Discarded { reason: String },
}
