//! The journal: the in-memory event log and its only writer.
//!
//! Events are kept newest first. Every mutation writes the full log back to
//! the store and then hands the new snapshot to each subscriber.

use jiff::{Timestamp, tz::TimeZone};
use tracing::debug;
use uuid::Uuid;

use crate::model::Event;
use crate::stats;
use crate::storage::EventStore;

type Subscriber = Box<dyn FnMut(&[Event])>;

/// The authoritative event log, kept in sync with an [`EventStore`].
pub struct Journal<S> {
    store: S,
    events: Vec<Event>,
    subscribers: Vec<Subscriber>,
}

/// Result of resolving an id reference against the journal.
#[derive(Debug)]
pub enum Lookup<'a> {
    Found(&'a Event),
    NotFound,
    Ambiguous(Vec<&'a Event>),
}

impl<S: EventStore> Journal<S> {
    /// Loads the log from the store once. The store is not read again.
    pub fn open(store: S) -> Self {
        let events = store.load();
        debug!(count = events.len(), "journal loaded");
        Self {
            store,
            events,
            subscribers: Vec::new(),
        }
    }

    /// The current log, newest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Prepends an event. Nothing is validated.
    pub fn add(&mut self, event: Event) -> &[Event] {
        debug!(id = %event.id, "adding event");
        self.events.insert(0, event);
        self.commit();
        &self.events
    }

    /// Removes the event with `id`. Unknown ids leave the log unchanged.
    pub fn remove(&mut self, id: Uuid) -> &[Event] {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            debug!(%id, "remove: no such event");
        }
        self.commit();
        &self.events
    }

    /// Events on the same calendar day as `now` in `tz`.
    pub fn today(&self, now: Timestamp, tz: &TimeZone) -> Vec<&Event> {
        let today = stats::local_date(now, tz);
        self.events
            .iter()
            .filter(|e| stats::local_date(e.timestamp, tz) == today)
            .collect()
    }

    /// Registers a callback that receives the log after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Event]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Resolves a full id or an id prefix (e.g. `a3b`).
    ///
    /// A blank reference matches nothing.
    pub fn find_by_prefix(&self, reference: &str) -> Lookup<'_> {
        let reference = reference.trim().to_ascii_lowercase();
        if reference.is_empty() {
            return Lookup::NotFound;
        }
        let matches: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.id.to_string().starts_with(&reference))
            .collect();

        match matches.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Found(matches[0]),
            _ => Lookup::Ambiguous(matches),
        }
    }

    fn commit(&mut self) {
        self.store.save(&self.events);
        for subscriber in &mut self.subscribers {
            subscriber(&self.events);
        }
    }
}
