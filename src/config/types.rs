//! Configuration file structures.

use serde::Deserialize;

use crate::models::Event;

/// Top-level structure of `events.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// All events known to the check-in system.
    pub events: Vec<Event>,
}
