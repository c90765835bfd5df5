//! Calendar events as they are stored and resolved.
//!
//! An event is anchored on a single day and optionally repeats every week or every
//! month from that day on, up to an inclusive `until` bound.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

use crate::date_key::DateKey;

/// A calendar event.
///
/// Events are never edited in place: they are created once and later removed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier, only used to find the event again for removal.
    pub id: String,
    pub title: String,
    /// Anchor day. For recurring events this is the first possible occurrence.
    pub date: DateKey,

    /// Free-form time of day (e.g. "14:30"). None means all day.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,

    /// Length in minutes, kept as entered.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,

    #[serde(default)]
    pub recurrence: Recurrence,

    /// Last day (inclusive) a recurring event may occur on. Ignored for one-off events.
    #[serde(
        default,
        deserialize_with = "empty_as_none_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub until: Option<DateKey>,
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(
        title: String,
        date: DateKey,
        time: Option<String>,
        duration: Option<String>,
        recurrence: Recurrence,
        until: Option<DateKey>,
    ) -> Self {
        Event {
            id: Self::generate_id(),
            title,
            date,
            time,
            duration,
            recurrence,
            until,
        }
    }

    pub fn generate_id() -> String {
        format!("event-{}", Uuid::new_v4())
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence != Recurrence::None
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// How often an event repeats.
///
/// Stored as a plain string. Values other than `none`, `weekly` and `monthly` are kept
/// verbatim in `Other` so they survive a load/save cycle; they never match any day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recurrence {
    #[default]
    None,
    Weekly,
    Monthly,
    Other(String),
}

impl Recurrence {
    pub fn as_str(&self) -> &str {
        match self {
            Recurrence::None => "none",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Other(raw) => raw,
        }
    }
}

impl From<String> for Recurrence {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "none" => Recurrence::None,
            "weekly" => Recurrence::Weekly,
            "monthly" => Recurrence::Monthly,
            _ => Recurrence::Other(raw),
        }
    }
}

impl From<&str> for Recurrence {
    fn from(raw: &str) -> Self {
        Recurrence::from(raw.to_string())
    }
}

impl From<Recurrence> for String {
    fn from(recurrence: Recurrence) -> Self {
        match recurrence {
            Recurrence::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Form inputs left blank are persisted as "", which means "not set".
fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

fn empty_as_none_key<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateKey>, D::Error> {
    match empty_as_none(deserializer)? {
        Some(raw) => DateKey::parse(&raw).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn new_events_get_distinct_ids() {
        let a = Event::new("A".into(), key("2024-01-01"), None, None, Recurrence::None, None);
        let b = Event::new("A".into(), key("2024-01-01"), None, None, Recurrence::None, None);
        assert!(a.id.starts_with("event-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_string_fields_and_omits_absent_optionals() {
        let event = Event {
            id: "event-1".into(),
            title: "Training".into(),
            date: key("2024-01-15"),
            time: Some("18:00".into()),
            duration: None,
            recurrence: Recurrence::Weekly,
            until: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "event-1",
                "title": "Training",
                "date": "2024-01-15",
                "time": "18:00",
                "recurrence": "weekly",
            })
        );
    }

    #[test]
    fn deserializes_records_written_by_the_form() {
        let raw = r#"{
            "id": "event-1706000000000",
            "title": "Sparring",
            "date": "2024-01-15",
            "time": "",
            "duration": "90",
            "recurrence": "monthly",
            "until": ""
        }"#;

        let event: Event = serde_json::from_str(raw).unwrap();
        assert_eq!(event.time, None);
        assert_eq!(event.duration.as_deref(), Some("90"));
        assert_eq!(event.recurrence, Recurrence::Monthly);
        assert_eq!(event.until, None);
    }

    #[test]
    fn missing_recurrence_defaults_to_none() {
        let raw = r#"{"id": "e", "title": "T", "date": "2024-01-15"}"#;
        let event: Event = serde_json::from_str(raw).unwrap();
        assert_eq!(event.recurrence, Recurrence::None);
        assert!(!event.is_recurring());
    }

    #[test]
    fn unknown_recurrence_is_kept_verbatim() {
        let raw = r#"{"id": "e", "title": "T", "date": "2024-01-15", "recurrence": "yearly"}"#;
        let event: Event = serde_json::from_str(raw).unwrap();
        assert_eq!(event.recurrence, Recurrence::Other("yearly".into()));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["recurrence"], "yearly");
    }

    #[test]
    fn invalid_until_is_rejected() {
        let raw = r#"{"id": "e", "title": "T", "date": "2024-01-15", "until": "soon"}"#;
        assert!(serde_json::from_str::<Event>(raw).is_err());
    }
}
