//! Attendee lookup collaborators.
//!
//! The engine only needs one seam here: given an attendee id, produce a
//! normalized [`AttendeeRecord`] or nothing. [`CsvRoster`] implements the
//! seam for the spreadsheet-import mode; a database-backed store slots in
//! behind the same trait.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendeeRecord;

/// Looks up attendees by id.
///
/// Implementations guarantee best-effort field population: a returned record
/// always has a non-empty `attendee_id`, with missing fields defaulted. A
/// miss is `None`, never an error.
pub trait AttendeeLookup {
    /// Finds the attendee with the given id.
    fn find(&self, attendee_id: &str) -> Option<AttendeeRecord>;
}

/// An in-memory roster imported from a delimited file.
///
/// Rows are addressed by header name, with the same tolerant column matching
/// used for database rows. Rows without a usable attendee id are skipped;
/// when an id repeats, the first row wins.
///
/// # Example
///
/// ```no_run
/// use checkin_engine::roster::{AttendeeLookup, CsvRoster};
///
/// let roster = CsvRoster::load("./tests/data/roster.csv")?;
/// if let Some(record) = roster.find("A-1042") {
///     println!("{}", record.display_name());
/// }
/// # Ok::<(), checkin_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvRoster {
    records: HashMap<String, AttendeeRecord>,
}

impl CsvRoster {
    /// Loads a roster from a CSV file with a header row.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let mut reader = csv::Reader::from_path(path).map_err(|e| match e.kind() {
            csv::ErrorKind::Io(_) => EngineError::RosterNotFound {
                path: path_str.clone(),
            },
            _ => EngineError::RosterParseError {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        let headers = reader
            .headers()
            .map_err(|e| EngineError::RosterParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
            .clone();

        let mut records = HashMap::new();
        for row in reader.records() {
            let row = row.map_err(|e| EngineError::RosterParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

            let fields: HashMap<String, Value> = headers
                .iter()
                .zip(row.iter())
                .map(|(header, value)| (header.to_string(), Value::String(value.to_string())))
                .collect();

            if let Some(record) = AttendeeRecord::from_row(&fields) {
                records.entry(record.attendee_id.clone()).or_insert(record);
            }
        }

        Ok(Self { records })
    }

    /// Number of attendees in the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AttendeeLookup for CsvRoster {
    fn find(&self, attendee_id: &str) -> Option<AttendeeRecord> {
        self.records.get(attendee_id).cloned()
    }
}
