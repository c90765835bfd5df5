//! Recurrence resolution: which events fall on a given day.
//!
//! Nothing is cached. Every query walks the full event list, which keeps the rules in
//! one place and is cheap at the sizes involved (a personal event list checked against
//! at most 42 visible days).

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, Recurrence};

/// Whether `event` occurs on `date`.
///
/// One-off events match their anchor day only. Recurring events match from the anchor
/// day up to `until` (inclusive): weekly ones on the anchor's weekday, monthly ones on
/// the anchor's day of month. A monthly event anchored on the 31st skips shorter months.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    if !event.is_recurring() {
        return event.date == date;
    }

    let start = event.date.date();
    if date < start {
        return false;
    }

    if event.until.is_some_and(|until| date > until.date()) {
        return false;
    }

    match &event.recurrence {
        Recurrence::Weekly => date.weekday() == start.weekday(),
        Recurrence::Monthly => date.day() == start.day(),
        Recurrence::None | Recurrence::Other(_) => false,
    }
}

/// All events occurring on `date`, in the order they appear in `events`.
pub fn occurrences_on<'a, I>(events: I, date: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| occurs_on(event, date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::DateKey;

    fn date(s: &str) -> NaiveDate {
        crate::date_key::parse(s).unwrap()
    }

    fn event(anchor: &str, recurrence: Recurrence, until: Option<&str>) -> Event {
        Event {
            id: format!("event-{anchor}-{recurrence}"),
            title: "Practice".into(),
            date: DateKey::parse(anchor).unwrap(),
            time: None,
            duration: None,
            recurrence,
            until: until.map(|u| DateKey::parse(u).unwrap()),
        }
    }

    #[test]
    fn one_off_event_matches_only_its_day() {
        let e = event("2024-01-15", Recurrence::None, None);
        assert!(occurs_on(&e, date("2024-01-15")));
        assert!(!occurs_on(&e, date("2024-01-14")));
        assert!(!occurs_on(&e, date("2024-01-22")));
        assert!(!occurs_on(&e, date("2024-02-15")));
    }

    #[test]
    fn one_off_event_ignores_until() {
        let e = event("2024-01-15", Recurrence::None, Some("2023-01-01"));
        assert!(occurs_on(&e, date("2024-01-15")));
    }

    #[test]
    fn weekly_event_matches_anchor_weekday() {
        // 2024-01-01 is a Monday
        let e = event("2024-01-01", Recurrence::Weekly, None);
        assert!(occurs_on(&e, date("2024-01-01")));
        assert!(occurs_on(&e, date("2024-01-08")));
        assert!(occurs_on(&e, date("2024-01-15")));
        assert!(occurs_on(&e, date("2025-06-30")));
        assert!(!occurs_on(&e, date("2024-01-02")));
        assert!(!occurs_on(&e, date("2024-01-07")));
    }

    #[test]
    fn recurring_event_never_matches_before_anchor() {
        let weekly = event("2024-01-01", Recurrence::Weekly, None);
        let monthly = event("2024-01-01", Recurrence::Monthly, None);
        for day in ["2023-12-25", "2023-12-01", "2020-01-06"] {
            assert!(!occurs_on(&weekly, date(day)));
            assert!(!occurs_on(&monthly, date(day)));
        }
    }

    #[test]
    fn monthly_event_respects_inclusive_until() {
        let e = event("2024-01-15", Recurrence::Monthly, Some("2024-03-01"));
        assert!(occurs_on(&e, date("2024-01-15")));
        assert!(occurs_on(&e, date("2024-02-15")));
        assert!(!occurs_on(&e, date("2024-03-01")));
        assert!(!occurs_on(&e, date("2024-03-15")));
    }

    #[test]
    fn until_day_itself_can_be_an_occurrence() {
        let e = event("2024-01-15", Recurrence::Monthly, Some("2024-03-15"));
        assert!(occurs_on(&e, date("2024-03-15")));
        assert!(!occurs_on(&e, date("2024-04-15")));
    }

    #[test]
    fn monthly_event_on_31st_skips_short_months() {
        let e = event("2024-01-31", Recurrence::Monthly, None);
        let mut day = date("2024-04-01");
        while day <= date("2024-04-30") {
            assert!(!occurs_on(&e, day), "unexpected match on {day}");
            day = day.succ_opt().unwrap();
        }
        assert!(!occurs_on(&e, date("2024-02-29")));
        assert!(occurs_on(&e, date("2024-03-31")));
        assert!(occurs_on(&e, date("2024-05-31")));
    }

    #[test]
    fn until_before_anchor_yields_no_occurrences() {
        let e = event("2024-01-15", Recurrence::Weekly, Some("2024-01-01"));
        assert!(!occurs_on(&e, date("2024-01-15")));
        assert!(!occurs_on(&e, date("2024-01-22")));
    }

    #[test]
    fn unknown_recurrence_never_matches() {
        let e = event("2024-01-15", Recurrence::Other("yearly".into()), None);
        assert!(!occurs_on(&e, date("2024-01-15")));
        assert!(!occurs_on(&e, date("2025-01-15")));
    }

    #[test]
    fn occurrences_keep_list_order() {
        let events = vec![
            event("2024-01-08", Recurrence::None, None),
            event("2024-01-01", Recurrence::Weekly, None),
            event("2024-01-09", Recurrence::None, None),
            event("2023-12-08", Recurrence::Monthly, None),
        ];

        let found = occurrences_on(&events, date("2024-01-08"));
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![events[0].id.as_str(), events[1].id.as_str(), events[3].id.as_str()]);

        assert!(occurrences_on(&events, date("2024-01-10")).is_empty());
    }
}
