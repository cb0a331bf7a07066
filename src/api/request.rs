//! Request types for the check-in API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::RenderMode;

/// Request body for the `/scan` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// The scanned attendee id.
    pub attendee_id: String,
    /// Badge rendering mode; defaults to preview.
    #[serde(default)]
    pub mode: RenderMode,
}

/// Request body for the `/classify` endpoint.
///
/// All fields are optional; missing fields are treated as empty strings or
/// a cleared flag, matching the engine's failure semantics. The pirata flag
/// is accepted in its loose source form (string, number, boolean, null) and
/// normalized server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The event display name.
    #[serde(default)]
    pub event_name: String,
    /// The entry-type string.
    #[serde(default)]
    pub entry_type: String,
    /// The pirata flag in loose form.
    #[serde(default)]
    pub pirata_flag: Value,
}
