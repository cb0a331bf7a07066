//! Authorization against the active-event set.
//!
//! The set of currently active events is passed in explicitly by the caller
//! rather than read from process-wide state, so the check stays a pure
//! function and the host decides where the set lives.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::EventId;

/// The outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOutcome {
    /// Whether check-in may proceed.
    pub authorized: bool,
    /// Human-readable reason, written to the access log as-is.
    pub reason: String,
}

impl AuthorizationOutcome {
    fn denied(reason: impl Into<String>) -> Self {
        Self {
            authorized: false,
            reason: reason.into(),
        }
    }
}

/// Checks whether an attendee's event is among the active events.
///
/// Denials carry a specific reason: no active events selected, an event id
/// that did not parse at ingestion, or an event outside the active set.
/// Never fails.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use checkin_engine::classification::authorize;
///
/// let active: HashSet<i64> = [1, 2].into_iter().collect();
/// assert!(authorize(Some(1), &active).authorized);
/// assert!(!authorize(Some(9), &active).authorized);
/// assert!(!authorize(None, &active).authorized);
/// ```
pub fn authorize(
    event_id: Option<EventId>,
    active_events: &HashSet<EventId>,
) -> AuthorizationOutcome {
    if active_events.is_empty() {
        return AuthorizationOutcome::denied("No active events selected");
    }

    let Some(event_id) = event_id else {
        return AuthorizationOutcome::denied("Invalid event id on attendee record");
    };

    if active_events.contains(&event_id) {
        AuthorizationOutcome {
            authorized: true,
            reason: "Access authorized".to_string(),
        }
    } else {
        AuthorizationOutcome::denied(format!(
            "Attendee event {event_id} is not among the active events"
        ))
    }
}
