//! Event category detection.
//!
//! Wristband and backpack guidance only applies to the two recognized event
//! families; every other event suppresses the indicator panel entirely.

use serde::{Deserialize, Serialize};

/// The recognized event families for wristband purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// LPN congress events.
    Lpn,
    /// PorciForum congress events.
    PorciForum,
    /// Any other event; no wristband guidance applies.
    Other,
}

/// Detects the event category from a display name.
///
/// Matching is a case-insensitive substring check: "lpn" marks the LPN
/// family, "porciforum" or "porci forum" the PorciForum family. LPN is
/// checked first, mirroring the rule precedence in [`super::classify`].
///
/// # Example
///
/// ```
/// use checkin_engine::classification::{EventCategory, event_category};
///
/// assert_eq!(event_category("LPN Congress 2025"), EventCategory::Lpn);
/// assert_eq!(event_category("PorciForum Latam"), EventCategory::PorciForum);
/// assert_eq!(event_category("Annual Meetup"), EventCategory::Other);
/// ```
pub fn event_category(event_name: &str) -> EventCategory {
    let event = event_name.to_lowercase();
    if event.contains("lpn") {
        EventCategory::Lpn
    } else if event.contains("porciforum") || event.contains("porci forum") {
        EventCategory::PorciForum
    } else {
        EventCategory::Other
    }
}

/// Whether the wristband/backpack indicator panel is shown for an event.
///
/// The panel, and with it any wristband or backpack guidance, is shown only
/// for the recognized event families. For all other events the guidance is
/// suppressed even where the rule chain would otherwise produce a result.
pub fn shows_wristband_panel(event_name: &str) -> bool {
    event_category(event_name) != EventCategory::Other
}
