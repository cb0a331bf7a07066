//! Event model and identifier type.

use serde::{Deserialize, Serialize};

/// Numeric identifier for an event.
///
/// Source data carries event ids as strings, integers, or floats; they are
/// normalized to this type at ingestion.
pub type EventId = i64;

/// An event known to the check-in system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: EventId,
    /// The display name of the event (e.g., "LPN Congress 2025").
    pub name: String,
    /// Whether the event is currently open for check-in.
    #[serde(default)]
    pub active: bool,
}
