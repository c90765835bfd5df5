//! Months and the day grid shown for one month.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::date_key::DateKey;

/// Columns in the grid, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month, represented by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth(date - chrono::Days::new(u64::from(date.day0())))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Move by `delta` months, carrying into the year. None if the result is out of range.
    pub fn shift(&self, delta: i32) -> Option<Self> {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        };
        shifted.map(YearMonth)
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let month = self.0.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %Y"))
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: DateKey,
    pub day: u32,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_events: bool,
}

/// Layout of a month: blank cells before day 1, then one cell per day.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: YearMonth,
    /// Empty cells before the first day (its weekday, Sunday = 0).
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build<F>(
        month: YearMonth,
        selected: NaiveDate,
        today: NaiveDate,
        has_events: F,
    ) -> Self
    where
        F: Fn(NaiveDate) -> bool,
    {
        let leading_blanks = month.first_day().weekday().num_days_from_sunday() as usize;

        let days = month
            .days()
            .map(|date| DayCell {
                date,
                key: DateKey::new(date),
                day: date.day(),
                is_selected: date == selected,
                is_today: date == today,
                has_events: has_events(date),
            })
            .collect();

        MonthGrid {
            month,
            leading_blanks,
            days,
        }
    }

    /// Grid rows of seven cells; None marks a blank before day 1 or after the last day.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut cells: Vec<Option<&DayCell>> = vec![None; self.leading_blanks];
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn of_drops_day_of_month() {
        let month = YearMonth::of(date(2026, 10, 19));
        assert_eq!(month.first_day(), date(2026, 10, 1));
        assert_eq!((month.year(), month.month()), (2026, 10));
    }

    #[test]
    fn shift_carries_into_year() {
        let december = YearMonth::new(2024, 12).unwrap();
        assert_eq!(december.shift(1), YearMonth::new(2025, 1));

        let january = YearMonth::new(2024, 1).unwrap();
        assert_eq!(january.shift(-1), YearMonth::new(2023, 12));

        assert_eq!(january.shift(25), YearMonth::new(2026, 2));
        assert_eq!(january.shift(0), Some(january));
    }

    #[test]
    fn days_cover_the_month_across_leap_years() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days().count(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days().count(), 28);
        assert_eq!(YearMonth::new(2024, 4).unwrap().days().count(), 30);
        assert_eq!(YearMonth::new(2024, 12).unwrap().days().last(), Some(date(2024, 12, 31)));
    }

    #[test]
    fn displays_month_name_and_year() {
        assert_eq!(YearMonth::new(2026, 10).unwrap().to_string(), "October 2026");
    }

    #[test]
    fn grid_offsets_first_day_by_weekday() {
        // 2024-09-01 is a Sunday, 2024-02-01 a Thursday
        let september = MonthGrid::build(
            YearMonth::new(2024, 9).unwrap(),
            date(2024, 9, 1),
            date(2024, 9, 1),
            |_| false,
        );
        assert_eq!(september.leading_blanks, 0);

        let february = MonthGrid::build(
            YearMonth::new(2024, 2).unwrap(),
            date(2024, 2, 1),
            date(2024, 2, 1),
            |_| false,
        );
        assert_eq!(february.leading_blanks, 4);
        assert_eq!(february.days.len(), 29);
    }

    #[test]
    fn grid_marks_selected_today_and_events() {
        let grid = MonthGrid::build(
            YearMonth::new(2024, 1).unwrap(),
            date(2024, 1, 10),
            date(2024, 1, 3),
            |d| d.weekday() == chrono::Weekday::Mon,
        );

        let days_where = |flag: fn(&DayCell) -> bool| -> Vec<u32> {
            grid.days.iter().filter(|c| flag(c)).map(|c| c.day).collect()
        };
        let selected = days_where(|c| c.is_selected);
        let today = days_where(|c| c.is_today);
        let busy = days_where(|c| c.has_events);

        assert_eq!(selected, vec![10]);
        assert_eq!(today, vec![3]);
        assert_eq!(busy, vec![1, 8, 15, 22, 29]);
        assert_eq!(grid.days[0].key.to_string(), "2024-01-01");
    }

    #[test]
    fn selection_outside_month_marks_nothing() {
        let grid = MonthGrid::build(
            YearMonth::new(2024, 1).unwrap(),
            date(2024, 2, 10),
            date(2023, 12, 3),
            |_| false,
        );
        assert!(grid.days.iter().all(|c| !c.is_selected && !c.is_today));
    }

    #[test]
    fn weeks_pad_to_full_rows() {
        // February 2024 starts on Thursday: 4 blanks + 29 days = 33 cells -> 5 rows
        let grid = MonthGrid::build(
            YearMonth::new(2024, 2).unwrap(),
            date(2024, 2, 1),
            date(2024, 2, 1),
            |_| false,
        );
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks[0][..4].iter().all(Option::is_none));
        assert_eq!(weeks[0][4].map(|c| c.day), Some(1));
        assert_eq!(weeks[4][4].map(|c| c.day), Some(29));
        assert!(weeks[4][5].is_none());
    }
}
