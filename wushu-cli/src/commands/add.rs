use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use wushu_core::date_key;
use wushu_core::event::Recurrence;
use wushu_core::storage::Storage;
use wushu_core::{CalendarSession, EventSubmission};

pub fn run<S: Storage>(
    mut session: CalendarSession<S>,
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
    duration: Option<String>,
    recurrence: Recurrence,
    until: Option<String>,
) -> Result<()> {
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .allow_empty(true)
            .interact_text()?,
    };

    let date = date.unwrap_or_else(|| date_key::format(session.selected_date()));

    let submission = EventSubmission {
        title,
        date,
        time,
        duration,
        recurrence,
        until,
    };

    submit(&mut session, submission)
}

/// Add the event and report the outcome.
pub fn submit<S: Storage>(
    session: &mut CalendarSession<S>,
    submission: EventSubmission,
) -> Result<()> {
    match session.add_event(submission)? {
        Some(event) => println!(
            "{}",
            format!("  Created: {} [{}]", event.title, event.id).green()
        ),
        None => println!(
            "{}",
            "  Nothing added: a title and a date are required".dimmed()
        ),
    }
    Ok(())
}

/// Ask for every event field, offering `default_date` for the date.
pub fn prompt_submission(default_date: &str) -> Result<EventSubmission> {
    let title: String = Input::new()
        .with_prompt("  Title")
        .allow_empty(true)
        .interact_text()?;

    let date: String = Input::new()
        .with_prompt("  Date")
        .default(default_date.to_string())
        .interact_text()?;

    let time = prompt_optional("  Time (all day)")?;
    let duration = prompt_optional("  Duration in minutes (skip)")?;

    let options = [Recurrence::None, Recurrence::Weekly, Recurrence::Monthly];
    let labels: Vec<&str> = options.iter().map(Recurrence::as_str).collect();
    let choice = Select::new()
        .with_prompt("  Repeats")
        .items(&labels)
        .default(0)
        .interact()?;
    let recurrence = options[choice].clone();

    let until = if recurrence == Recurrence::None {
        None
    } else {
        prompt_optional("  Until (forever)")?
    };

    Ok(EventSubmission {
        title,
        date,
        time,
        duration,
        recurrence,
        until,
    })
}

fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(if value.is_empty() { None } else { Some(value) })
}
