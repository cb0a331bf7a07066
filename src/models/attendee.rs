//! Attendee record model and ingestion normalizer.
//!
//! Source rows come from loosely-typed tabular data (a SQL result set or an
//! imported spreadsheet) whose column names vary in casing and spelling and
//! whose flag fields may be strings, integers, floats, or empty. All of that
//! variability is collapsed here, once, into a canonical [`AttendeeRecord`];
//! the rest of the engine never performs fallback field lookups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EventId;

/// Candidate column names for each logical field, in lookup order.
///
/// Matching is ASCII-case-insensitive, so one spelling per variant suffices.
const ID_KEYS: &[&str] = &["idUsuario", "id"];
const NAME_KEYS: &[&str] = &["Nombrecompleto", "nombre", "name"];
const LAST_NAME_KEYS: &[&str] = &["apellidos", "last_name"];
const COMPANY_KEYS: &[&str] = &["Empresa", "company"];
const EVENT_KEYS: &[&str] = &["Evento", "event"];
const ENTRY_KEYS: &[&str] = &["Entrada", "entry_type"];
const PIRATA_KEYS: &[&str] = &["pirata"];
const PAID_KEYS: &[&str] = &["pagado", "paid"];
const DAYS_KEYS: &[&str] = &["Dia", "dias", "days"];

/// A canonical attendee record, produced once per lookup.
///
/// Immutable value object: created by [`AttendeeRecord::from_row`] (or by a
/// lookup collaborator directly) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    /// Unique attendee identifier; also the QR payload on the badge.
    pub attendee_id: String,
    /// First name(s); may be empty.
    pub full_name: String,
    /// Last name(s); may be empty.
    pub last_name: String,
    /// Company or organisation; may be empty.
    pub company: String,
    /// The event the attendee is registered for, when the source id parsed.
    pub event_id: Option<EventId>,
    /// Free-text ticket category (e.g., "Congress", "Expo", "General").
    pub entry_type: String,
    /// Whether the attendee is excluded from kit distribution.
    pub pirata: bool,
    /// Whether the attendee has paid; affects only the badge's paid marker.
    pub paid: bool,
    /// Display string for attendance days; not used in classification.
    pub days: String,
}

impl AttendeeRecord {
    /// Builds a canonical record from a loosely-typed row.
    ///
    /// Field lookup is case-insensitive across the known column spellings,
    /// missing fields default to empty strings, and flag fields are parsed
    /// with [`parse_flag`]. Returns `None` only when no non-empty attendee
    /// id is present, since the id is the one field a row cannot do without.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use checkin_engine::models::AttendeeRecord;
    /// use serde_json::json;
    ///
    /// let mut row = HashMap::new();
    /// row.insert("idUsuario".to_string(), json!("A-1042"));
    /// row.insert("Nombrecompleto".to_string(), json!("Marta"));
    /// row.insert("entrada".to_string(), json!("Congress Pass"));
    /// row.insert("pirata".to_string(), json!("garbage"));
    ///
    /// let record = AttendeeRecord::from_row(&row).unwrap();
    /// assert_eq!(record.attendee_id, "A-1042");
    /// assert_eq!(record.entry_type, "Congress Pass");
    /// assert!(!record.pirata);
    /// ```
    pub fn from_row(row: &HashMap<String, Value>) -> Option<Self> {
        let attendee_id = text_field(row, ID_KEYS);
        if attendee_id.is_empty() {
            return None;
        }

        Some(Self {
            attendee_id,
            full_name: text_field(row, NAME_KEYS),
            last_name: text_field(row, LAST_NAME_KEYS),
            company: text_field(row, COMPANY_KEYS),
            event_id: event_id_field(row),
            entry_type: text_field(row, ENTRY_KEYS),
            pirata: parse_flag(field(row, PIRATA_KEYS)),
            paid: parse_flag(field(row, PAID_KEYS)),
            days: text_field(row, DAYS_KEYS),
        })
    }

    /// Returns the full display name ("first last", trimmed).
    pub fn display_name(&self) -> String {
        format!("{} {}", self.full_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Parses a loosely-typed flag field into a boolean.
///
/// The flag is set only when the value parses to exactly `1`: integers and
/// floats compare numerically (fractions truncate), strings are trimmed and
/// parsed, booleans map to 0/1. Anything unparseable, missing, or empty
/// yields `false`. This function never fails.
///
/// # Example
///
/// ```
/// use checkin_engine::models::parse_flag;
/// use serde_json::json;
///
/// assert!(parse_flag(Some(&json!(1))));
/// assert!(parse_flag(Some(&json!("1"))));
/// assert!(parse_flag(Some(&json!(1.0))));
/// assert!(!parse_flag(Some(&json!("2"))));
/// assert!(!parse_flag(Some(&json!("garbage"))));
/// assert!(!parse_flag(Some(&json!(""))));
/// assert!(!parse_flag(None));
/// ```
pub fn parse_flag(value: Option<&Value>) -> bool {
    numeric_value(value) == Some(1)
}

/// Interprets a loose value as an integer, if it can be.
fn numeric_value(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<i64>().ok()
        }
        _ => None,
    }
}

/// Looks up the first matching column, comparing names case-insensitively.
fn field<'a>(row: &'a HashMap<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| {
        row.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

/// Extracts a trimmed text field, defaulting to the empty string.
fn text_field(row: &HashMap<String, Value>, names: &[&str]) -> String {
    match field(row, names) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Extracts the event id, tolerating string-typed ids.
fn event_id_field(row: &HashMap<String, Value>) -> Option<EventId> {
    numeric_value(field(row, EVENT_KEYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_row_full_record() {
        let row = row(&[
            ("idUsuario", json!("A-1042")),
            ("Nombrecompleto", json!("Marta")),
            ("apellidos", json!("Vidal Serra")),
            ("Empresa", json!("Granja Sol SL")),
            ("Evento", json!(1)),
            ("Entrada", json!("Congress Pass")),
            ("pirata", json!(0)),
            ("pagado", json!(1)),
            ("Dia", json!("12-13 Nov")),
        ]);

        let record = AttendeeRecord::from_row(&row).unwrap();
        assert_eq!(record.attendee_id, "A-1042");
        assert_eq!(record.full_name, "Marta");
        assert_eq!(record.last_name, "Vidal Serra");
        assert_eq!(record.company, "Granja Sol SL");
        assert_eq!(record.event_id, Some(1));
        assert_eq!(record.entry_type, "Congress Pass");
        assert!(!record.pirata);
        assert!(record.paid);
        assert_eq!(record.days, "12-13 Nov");
    }

    #[test]
    fn test_from_row_matches_columns_case_insensitively() {
        // Legacy exports mix 'Entrada'/'entrada' and similar casings.
        let row = row(&[
            ("IDUSUARIO", json!("B-7")),
            ("entrada", json!("Expo Pass")),
            ("EMPRESA", json!("Acme")),
        ]);

        let record = AttendeeRecord::from_row(&row).unwrap();
        assert_eq!(record.attendee_id, "B-7");
        assert_eq!(record.entry_type, "Expo Pass");
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn test_from_row_missing_fields_default_to_empty() {
        let row = row(&[("idUsuario", json!("C-3"))]);

        let record = AttendeeRecord::from_row(&row).unwrap();
        assert_eq!(record.full_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.company, "");
        assert_eq!(record.entry_type, "");
        assert_eq!(record.event_id, None);
        assert!(!record.pirata);
        assert!(!record.paid);
    }

    #[test]
    fn test_from_row_without_attendee_id_is_none() {
        let no_id = row(&[("Nombrecompleto", json!("Nadie"))]);
        assert!(AttendeeRecord::from_row(&no_id).is_none());

        let blank_id = row(&[("idUsuario", json!("   "))]);
        assert!(AttendeeRecord::from_row(&blank_id).is_none());
    }

    #[test]
    fn test_from_row_numeric_attendee_id() {
        let row = row(&[("idUsuario", json!(1042))]);
        let record = AttendeeRecord::from_row(&row).unwrap();
        assert_eq!(record.attendee_id, "1042");
    }

    #[test]
    fn test_event_id_accepts_string_and_number() {
        let numeric = row(&[("idUsuario", json!("x")), ("Evento", json!(2))]);
        assert_eq!(AttendeeRecord::from_row(&numeric).unwrap().event_id, Some(2));

        let stringly = row(&[("idUsuario", json!("x")), ("Evento", json!(" 2 "))]);
        assert_eq!(AttendeeRecord::from_row(&stringly).unwrap().event_id, Some(2));

        let invalid = row(&[("idUsuario", json!("x")), ("Evento", json!("two"))]);
        assert_eq!(AttendeeRecord::from_row(&invalid).unwrap().event_id, None);
    }

    #[test]
    fn test_parse_flag_accepts_only_exact_one() {
        assert!(parse_flag(Some(&json!(1))));
        assert!(parse_flag(Some(&json!("1"))));
        assert!(parse_flag(Some(&json!(" 1 "))));
        assert!(parse_flag(Some(&json!(true))));
        assert!(parse_flag(Some(&json!(1.0))));

        assert!(!parse_flag(Some(&json!(0))));
        assert!(!parse_flag(Some(&json!(2))));
        assert!(!parse_flag(Some(&json!("0"))));
        assert!(!parse_flag(Some(&json!(""))));
        assert!(!parse_flag(Some(&json!("yes"))));
        assert!(!parse_flag(Some(&json!(null))));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_parse_flag_never_panics_on_odd_values() {
        assert!(!parse_flag(Some(&json!({"nested": 1}))));
        assert!(!parse_flag(Some(&json!([1]))));
    }

    #[test]
    fn test_display_name_trims_missing_parts() {
        let only_first = AttendeeRecord {
            attendee_id: "a".to_string(),
            full_name: "Marta".to_string(),
            last_name: String::new(),
            company: String::new(),
            event_id: None,
            entry_type: String::new(),
            pirata: false,
            paid: false,
            days: String::new(),
        };
        assert_eq!(only_first.display_name(), "Marta");
    }

    #[test]
    fn test_record_json_round_trip() {
        let row = row(&[
            ("idUsuario", json!("A-1")),
            ("Entrada", json!("Expo")),
            ("pirata", json!("1")),
        ]);
        let record = AttendeeRecord::from_row(&row).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: AttendeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
