//! Append-only access audit log.
//!
//! Every scan outcome, authorized or denied, is appended as one delimited
//! row: timestamp, attendee identity, event, outcome, reason, and the
//! active-event set at that moment. The file is opened per append so the
//! log survives process restarts and external rotation.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendeeRecord, EventId};

/// Outcome column values.
const OUTCOME_AUTHORIZED: &str = "AUTHORIZED";
const OUTCOME_DENIED: &str = "DENIED";

/// An append-only CSV access log.
///
/// # Example
///
/// ```no_run
/// use std::collections::HashSet;
/// use checkin_engine::access_log::AccessLog;
/// use checkin_engine::models::AttendeeRecord;
///
/// let log = AccessLog::new("accesses.csv");
/// # let attendee: AttendeeRecord = todo!();
/// let active: HashSet<i64> = [1].into_iter().collect();
/// log.record(&attendee, true, "Access authorized", &active)?;
/// # Ok::<(), checkin_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AccessLog {
    path: PathBuf,
}

impl AccessLog {
    /// Creates a log that appends to the given path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Appends one audit row for a scan outcome.
    pub fn record(
        &self,
        attendee: &AttendeeRecord,
        authorized: bool,
        reason: &str,
        active_events: &HashSet<EventId>,
    ) -> EngineResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e.to_string()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        // Stable ordering so identical states produce identical rows.
        let mut active: Vec<EventId> = active_events.iter().copied().collect();
        active.sort_unstable();
        let active_joined = active
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let event_field = attendee
            .event_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        let outcome = if authorized {
            OUTCOME_AUTHORIZED
        } else {
            OUTCOME_DENIED
        };

        writer
            .write_record([
                Utc::now().to_rfc3339().as_str(),
                attendee.attendee_id.as_str(),
                attendee.display_name().as_str(),
                attendee.company.as_str(),
                event_field.as_str(),
                outcome,
                reason,
                active_joined.as_str(),
            ])
            .map_err(|e| self.write_error(e.to_string()))?;

        writer
            .flush()
            .map_err(|e| self.write_error(e.to_string()))
    }

    fn write_error(&self, message: String) -> EngineError {
        EngineError::LogWriteError {
            path: self.path.display().to_string(),
            message,
        }
    }
}
