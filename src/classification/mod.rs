//! Classification logic for the check-in badge engine.
//!
//! This module contains the wristband/backpack decision engine: event
//! category detection, the five-rule precedence chain, the panel-visibility
//! gate for wristband guidance, and the authorization check against an
//! explicit set of active events.

mod authorization;
mod event_category;
mod rules;

pub use authorization::{AuthorizationOutcome, authorize};
pub use event_category::{EventCategory, event_category, shows_wristband_panel};
pub use rules::{classify, wristband_guidance};
