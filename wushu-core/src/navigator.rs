//! Displayed month and selected day.

use chrono::NaiveDate;
use tracing::warn;

use crate::date_key;
use crate::error::WushuResult;
use crate::month::YearMonth;

/// Tracks which month is shown and which day is selected.
///
/// The two are independent: the selected day may lie outside the displayed month.
#[derive(Debug, Clone)]
pub struct CalendarNavigator {
    current_month: YearMonth,
    selected_date: NaiveDate,
}

impl CalendarNavigator {
    /// Show the month containing `today`, with `today` selected.
    pub fn new(today: NaiveDate) -> Self {
        CalendarNavigator {
            current_month: YearMonth::of(today),
            selected_date: today,
        }
    }

    pub fn current_month(&self) -> YearMonth {
        self.current_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Move the displayed month forward (positive) or back (negative).
    pub fn shift_month(&mut self, direction: i32) {
        match self.current_month.shift(direction) {
            Some(month) => self.current_month = month,
            None => warn!(
                month = %self.current_month,
                direction, "Month shift out of supported range, staying put"
            ),
        }
    }

    /// Select the day named by `key`. The displayed month is left alone.
    pub fn select_date(&mut self, key: &str) -> WushuResult<()> {
        self.selected_date = date_key::parse(key)?;
        Ok(())
    }
}
