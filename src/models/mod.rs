//! Data models for the check-in badge engine.
//!
//! This module contains the value types used throughout the engine:
//! attendee records, classification results, and event identities.

mod attendee;
mod classification_result;
mod event;

pub use attendee::{AttendeeRecord, parse_flag};
pub use classification_result::{ClassificationResult, MatchedRule, WristbandColor};
pub use event::{Event, EventId};
