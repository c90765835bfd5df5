//! Canonical string keys for calendar days.
//!
//! A key is `YYYY-MM-DD` with month and day zero-padded to two digits, so comparing
//! two keys as strings gives the same answer as comparing the days they name.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{WushuError, WushuResult};

const DELIMITER: char = '-';

/// Serialize a calendar day into its key.
pub fn format(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a key back into a calendar day.
///
/// Components do not have to be zero-padded. Months and days outside their usual range
/// carry over, so `2024-13-01` is `2025-01-01` and `2024-03-00` is `2024-02-29`.
pub fn parse(key: &str) -> WushuResult<NaiveDate> {
    let invalid = || WushuError::InvalidDateKey(key.to_string());

    let parts: Vec<&str> = key.trim().split(DELIMITER).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let year: i64 = year.parse().map_err(|_| invalid())?;
    let month: i64 = month.parse().map_err(|_| invalid())?;
    let day: i64 = day.parse().map_err(|_| invalid())?;

    normalize(year, month, day).ok_or_else(invalid)
}

/// Build a date from possibly out-of-range components, carrying overflow into the
/// larger unit. Returns None when the result is outside chrono's supported range.
fn normalize(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let months_from_january = month.checked_sub(1)?;
    let year = year.checked_add(months_from_january.div_euclid(12))?;
    let month = u32::try_from(months_from_january.rem_euclid(12)).ok()? + 1;

    let first_of_month = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;

    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first_of_month.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first_of_month.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Identity of a calendar day, with no time-of-day component.
///
/// Ordering is chronological and agrees with the ordering of the string forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn parse(key: &str) -> WushuResult<Self> {
        parse(key).map(DateKey)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl PartialEq<NaiveDate> for DateKey {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format(self.0))
    }
}

impl FromStr for DateKey {
    type Err = WushuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateKey::parse(&raw).map_err(de::Error::custom)
    }
}
