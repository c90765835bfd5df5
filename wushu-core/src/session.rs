//! One calendar session: event store, navigation state and clock together.
//!
//! This is the surface the rendering and form layers talk to.

use chrono::NaiveDate;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::date_key::DateKey;
use crate::error::WushuResult;
use crate::event::{Event, Recurrence};
use crate::month::{MonthGrid, YearMonth};
use crate::navigator::CalendarNavigator;
use crate::storage::Storage;
use crate::store::EventStore;

/// Raw values from the event form, before any validation.
#[derive(Debug, Clone, Default)]
pub struct EventSubmission {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub recurrence: Recurrence,
    pub until: Option<String>,
}

impl EventSubmission {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        EventSubmission {
            title: title.into(),
            date: date.into(),
            ..Default::default()
        }
    }
}

pub struct CalendarSession<S: Storage> {
    store: EventStore<S>,
    navigator: CalendarNavigator,
    clock: Box<dyn Clock>,
}

impl<S: Storage> CalendarSession<S> {
    /// Open a session on today's date, according to the system clock.
    pub fn open(storage: S) -> Self {
        Self::with_clock(storage, Box::new(SystemClock))
    }

    pub fn with_clock(storage: S, clock: Box<dyn Clock>) -> Self {
        let navigator = CalendarNavigator::new(clock.today());
        CalendarSession {
            store: EventStore::load(storage),
            navigator,
            clock,
        }
    }

    // COMMANDS:

    /// Create and store an event from form input.
    ///
    /// Submissions with a blank title or date are ignored and return `Ok(None)`.
    /// Blank optional fields count as not set.
    pub fn add_event(&mut self, submission: EventSubmission) -> WushuResult<Option<Event>> {
        let title = submission.title.trim();
        let date = submission.date.trim();
        if title.is_empty() || date.is_empty() {
            debug!("Ignoring event submission without title or date");
            return Ok(None);
        }

        let until = match non_blank(submission.until) {
            Some(raw) => Some(DateKey::parse(&raw)?),
            None => None,
        };

        let event = Event::new(
            title.to_string(),
            DateKey::parse(date)?,
            non_blank(submission.time),
            non_blank(submission.duration),
            submission.recurrence,
            until,
        );

        self.store.add(event.clone())?;
        Ok(Some(event))
    }

    pub fn remove_event(&mut self, id: &str) -> WushuResult<()> {
        self.store.remove(id)
    }

    pub fn select_date(&mut self, key: &str) -> WushuResult<()> {
        self.navigator.select_date(key)
    }

    pub fn shift_month(&mut self, direction: i32) {
        self.navigator.shift_month(direction)
    }

    // QUERIES:

    pub fn occurrences_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.occurrences_on(date)
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.store.has_events_on(date)
    }

    /// Events on the selected day.
    pub fn selected_events(&self) -> Vec<&Event> {
        self.occurrences_on(self.selected_date())
    }

    pub fn current_month(&self) -> YearMonth {
        self.navigator.current_month()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.navigator.selected_date()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Grid for the displayed month with selection, today and event markers filled in.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.current_month(),
            self.selected_date(),
            self.today(),
            |date| self.has_events_on(date),
        )
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
