//! In-memory event list backed by a `Storage`.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{WushuError, WushuResult};
use crate::event::Event;
use crate::recurrence;
use crate::storage::Storage;

/// The event list, in insertion order.
///
/// Every mutation writes the whole list back to storage.
pub struct EventStore<S: Storage> {
    storage: S,
    events: Vec<Event>,
}

impl<S: Storage> EventStore<S> {
    /// Load the stored events. Missing, unreadable or malformed data gives an empty store.
    pub fn load(storage: S) -> Self {
        let events = read_events(&storage);
        debug!(count = events.len(), "Loaded events");
        EventStore { storage, events }
    }

    /// Write the full list to storage, replacing whatever was there.
    pub fn save(&mut self) -> WushuResult<()> {
        let raw = serde_json::to_string(&self.events)
            .map_err(|e| WushuError::Serialization(e.to_string()))?;
        self.storage.write_all(&raw)?;
        debug!(count = self.events.len(), "Saved events");
        Ok(())
    }

    pub fn add(&mut self, event: Event) -> WushuResult<()> {
        info!(id = %event.id, title = %event.title, "Adding event");
        self.events.push(event);
        self.save()
    }

    /// Remove every event with this id. Unknown ids leave the list as it was.
    pub fn remove(&mut self, id: &str) -> WushuResult<()> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        info!(id, removed = before - self.events.len(), "Removing event");
        self.save()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn occurrences_on(&self, date: NaiveDate) -> Vec<&Event> {
        recurrence::occurrences_on(&self.events, date)
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.events
            .iter()
            .any(|event| recurrence::occurs_on(event, date))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_events<S: Storage>(storage: &S) -> Vec<Event> {
    let raw = match storage.read_all() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Could not read stored events, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Event>>(&raw) {
        Ok(events) => events,
        Err(e) => {
            warn!(error = %e, "Stored events are malformed, starting empty");
            Vec::new()
        }
    }
}
