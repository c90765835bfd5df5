//! Terminal rendering for wushu-core types.
//!
//! Extension traits that turn the month grid and events into colored text with
//! owo_colors.

use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};
use wushu_core::event::{Event, Recurrence};
use wushu_core::month::{DayCell, MonthGrid, WEEKDAY_LABELS};

/// Width of one grid column, including the event marker.
const CELL_WIDTH: usize = 5;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let width = CELL_WIDTH * WEEKDAY_LABELS.len();
        let mut lines = Vec::new();

        let label = format!("{:^width$}", self.month.to_string());
        lines.push(label.bold().to_string());

        let header: String = WEEKDAY_LABELS
            .iter()
            .map(|d| format!("{:>4} ", d))
            .collect();
        lines.push(header.dimmed().to_string());

        for week in self.weeks() {
            let row: String = week
                .iter()
                .map(|cell| match cell {
                    Some(cell) => render_cell(cell),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

fn render_cell(cell: &DayCell) -> String {
    let mut style = Style::new();
    if cell.has_events {
        style = style.green();
    }
    if cell.is_today {
        style = style.bold().underline();
    }
    if cell.is_selected {
        style = style.reversed();
    }

    let marker = if cell.has_events { '•' } else { ' ' };
    format!(" {}{}", format!("{:>3}", cell.day).style(style), marker)
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{}\n    {}", self.title.bold(), event_meta(self).dimmed())
    }
}

/// Details line under an event title, e.g. "18:00 90 mins • weekly • until 2024-06-30".
pub fn event_meta(event: &Event) -> String {
    let time = event.time.clone().unwrap_or_else(|| "All day".to_string());
    let duration = event.duration.as_ref().map(|d| format!("{d} mins"));
    let recurrence = match &event.recurrence {
        Recurrence::None => None,
        other => Some(format!("• {other}")),
    };
    let until = event.until.map(|u| format!("• until {u}"));

    std::iter::once(time)
        .chain(duration)
        .chain(recurrence)
        .chain(until)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Long label for a day, e.g. "Monday, January 15, 2024".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// A day heading followed by its events, each with its id for removal.
pub fn render_day(date: NaiveDate, events: &[&Event]) -> String {
    let mut lines = vec![day_label(date).bold().to_string()];

    if events.is_empty() {
        lines.push(format!("  {}", "No events yet.".dimmed()));
    } else {
        for event in events {
            lines.push(format!("  {} {}", event.render(), format!("[{}]", event.id).dimmed()));
        }
    }

    lines.join("\n")
}
