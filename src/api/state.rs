//! Application state for the check-in API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashSet;
use std::sync::Arc;

use crate::access_log::AccessLog;
use crate::config::EventCatalog;
use crate::models::EventId;
use crate::roster::AttendeeLookup;

/// Shared application state.
///
/// Holds the event catalog, the attendee lookup collaborator, the explicit
/// active-event set, and an optional access log.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<EventCatalog>,
    roster: Arc<dyn AttendeeLookup + Send + Sync>,
    active_events: Arc<HashSet<EventId>>,
    access_log: Option<Arc<AccessLog>>,
}

impl AppState {
    /// Creates state over a catalog and a lookup collaborator.
    ///
    /// The active-event set is taken from the catalog's `active` flags;
    /// override it with [`AppState::with_active_events`].
    pub fn new(
        catalog: EventCatalog,
        roster: impl AttendeeLookup + Send + Sync + 'static,
    ) -> Self {
        let active_events = catalog.active_events();
        Self {
            catalog: Arc::new(catalog),
            roster: Arc::new(roster),
            active_events: Arc::new(active_events),
            access_log: None,
        }
    }

    /// Replaces the active-event set.
    pub fn with_active_events(mut self, active_events: HashSet<EventId>) -> Self {
        self.active_events = Arc::new(active_events);
        self
    }

    /// Attaches an access log; every scan outcome is appended to it.
    pub fn with_access_log(mut self, access_log: AccessLog) -> Self {
        self.access_log = Some(Arc::new(access_log));
        self
    }

    /// The event catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// The attendee lookup collaborator.
    pub fn roster(&self) -> &(dyn AttendeeLookup + Send + Sync) {
        self.roster.as_ref()
    }

    /// The currently active events.
    pub fn active_events(&self) -> &HashSet<EventId> {
        &self.active_events
    }

    /// The access log, when configured.
    pub fn access_log(&self) -> Option<&AccessLog> {
        self.access_log.as_deref()
    }
}
