//! Event log persistence: the whole log as one JSON blob.
//!
//! Loading never fails. A missing blob is an empty log; an unreadable or
//! corrupt blob is logged as a warning and also treated as empty.

use tracing::warn;

use crate::model::Event;

use super::{Result, Storage};

/// Key under which the event log is stored.
pub const LOG_KEY: &str = "cravingLogs";

/// Where the journal keeps its events.
pub trait EventStore {
    /// Loads the full log. Degrades to an empty log on any failure.
    fn load(&self) -> Vec<Event>;

    /// Replaces the stored log with `events`.
    fn save(&self, events: &[Event]);
}

impl<T: EventStore + ?Sized> EventStore for &T {
    fn load(&self) -> Vec<Event> {
        (**self).load()
    }

    fn save(&self, events: &[Event]) {
        (**self).save(events);
    }
}

impl Storage {
    /// Loads the event log, surfacing read and parse failures.
    pub fn try_load_events(&self) -> Result<Vec<Event>> {
        match self.get_blob(LOG_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serializes and stores the full event log.
    pub fn try_save_events(&self, events: &[Event]) -> Result<()> {
        let json = serde_json::to_string(events)?;
        self.put_blob(LOG_KEY, &json)
    }
}

impl EventStore for Storage {
    fn load(&self) -> Vec<Event> {
        self.try_load_events().unwrap_or_else(|e| {
            warn!(error = %e, "stored journal is unreadable, starting empty");
            Vec::new()
        })
    }

    fn save(&self, events: &[Event]) {
        if let Err(e) = self.try_save_events(events) {
            warn!(error = %e, count = events.len(), "failed to save journal");
        }
    }
}
