//! Event catalog loading and name resolution.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Event, EventId};

use super::types::EventsConfig;

/// The catalog of known events.
///
/// Loaded once from a YAML file and queried per scan to resolve an event id
/// to its display name. Resolution never fails: unknown ids fall back to an
/// `"Event <id>"` placeholder so a catalog gap cannot break the check-in
/// flow.
///
/// # Example
///
/// ```no_run
/// use checkin_engine::config::EventCatalog;
///
/// let catalog = EventCatalog::load("./config/events.yaml")?;
/// assert_eq!(catalog.event_name(1), "LPN Congress 2025");
/// assert_eq!(catalog.event_name(999), "Event 999");
/// # Ok::<(), checkin_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: HashMap<EventId, Event>,
}

impl EventCatalog {
    /// Loads the catalog from a YAML file.
    ///
    /// Returns `ConfigNotFound` when the file is missing and
    /// `ConfigParseError` when it does not deserialize.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EventsConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self::from_events(config.events))
    }

    /// Builds a catalog from an in-memory event list.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    /// Looks up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Resolves an event id to its display name.
    ///
    /// Unknown ids resolve to the `"Event <id>"` placeholder; this method
    /// never fails the check-in flow.
    pub fn event_name(&self, id: EventId) -> String {
        match self.events.get(&id) {
            Some(event) => event.name.clone(),
            None => format!("Event {id}"),
        }
    }

    /// The ids of events currently marked active.
    pub fn active_events(&self) -> HashSet<EventId> {
        self.events
            .values()
            .filter(|e| e.active)
            .map(|e| e.id)
            .collect()
    }

    /// Number of events in the catalog.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_catalog() -> EventCatalog {
        EventCatalog::from_events(vec![
            Event {
                id: 1,
                name: "LPN Congress 2025".to_string(),
                active: true,
            },
            Event {
                id: 2,
                name: "PorciForum Latam".to_string(),
                active: true,
            },
            Event {
                id: 3,
                name: "Annual Meetup".to_string(),
                active: false,
            },
        ])
    }

    #[test]
    fn test_event_name_resolves_known_ids() {
        let catalog = sample_catalog();
        assert_eq!(catalog.event_name(1), "LPN Congress 2025");
        assert_eq!(catalog.event_name(2), "PorciForum Latam");
    }

    #[test]
    fn test_event_name_falls_back_to_placeholder() {
        let catalog = sample_catalog();
        assert_eq!(catalog.event_name(999), "Event 999");
    }

    #[test]
    fn test_active_events_filters_inactive() {
        let catalog = sample_catalog();
        let active = catalog.active_events();
        assert!(active.contains(&1));
        assert!(active.contains(&2));
        assert!(!active.contains(&3));
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let err = EventCatalog::load("/does/not/exist/events.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_yaml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "events: [not a mapping").unwrap();

        let err = EventCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_round_trip_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "events:\n  - id: 7\n    name: Feria LPN\n    active: true"
        )
        .unwrap();

        let catalog = EventCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.event_name(7), "Feria LPN");
        assert!(catalog.active_events().contains(&7));
    }
}
