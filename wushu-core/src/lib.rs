//! Core of the wushu event calendar.
//!
//! - `date_key`: canonical `YYYY-MM-DD` day identities
//! - `event` and `recurrence`: the event model and which days an event falls on
//! - `store` and `storage`: the persisted event list
//! - `navigator`, `month` and `session`: the state a calendar view is drawn from

pub mod clock;
pub mod config;
pub mod date_key;
pub mod error;
pub mod event;
pub mod month;
pub mod navigator;
pub mod recurrence;
pub mod session;
pub mod storage;
pub mod store;

pub use date_key::DateKey;
pub use error::{WushuError, WushuResult};
pub use event::{Event, Recurrence};
pub use session::{CalendarSession, EventSubmission};
