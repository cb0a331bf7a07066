//! Configuration loading for the check-in badge engine.
//!
//! The event catalog is the one piece of configuration: the set of known
//! events, loaded from a YAML file, with an id-to-display-name resolver
//! that never fails.

mod loader;
mod types;

pub use loader::EventCatalog;
pub use types::EventsConfig;
