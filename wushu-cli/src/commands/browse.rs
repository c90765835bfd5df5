use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use wushu_core::CalendarSession;
use wushu_core::date_key;
use wushu_core::storage::Storage;

use super::add;
use crate::render::{Render, render_day};

const ACTIONS: [&str; 6] = [
    "Previous month",
    "Next month",
    "Select day",
    "Add event",
    "Remove event",
    "Quit",
];

/// Interactive session: navigate months, pick days, add and remove events.
pub fn run<S: Storage>(mut session: CalendarSession<S>) -> Result<()> {
    loop {
        println!();
        println!("{}", session.month_grid().render());
        println!();
        println!(
            "{}",
            render_day(session.selected_date(), &session.selected_events())
        );
        println!();

        let action = Select::new()
            .with_prompt("  What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => session.shift_month(-1),
            1 => session.shift_month(1),
            2 => select_day(&mut session)?,
            3 => {
                let default_date = date_key::format(session.selected_date());
                let submission = add::prompt_submission(&default_date)?;
                if let Err(e) = add::submit(&mut session, submission) {
                    eprintln!("  {}", e.to_string().red());
                }
            }
            4 => remove_from_selected_day(&mut session)?,
            _ => return Ok(()),
        }
    }
}

fn select_day<S: Storage>(session: &mut CalendarSession<S>) -> Result<()> {
    let key: String = Input::new()
        .with_prompt("  Day")
        .default(date_key::format(session.selected_date()))
        .interact_text()?;

    if let Err(e) = session.select_date(&key) {
        eprintln!("  {}", e.to_string().red());
    }
    Ok(())
}

fn remove_from_selected_day<S: Storage>(session: &mut CalendarSession<S>) -> Result<()> {
    let candidates: Vec<(String, String)> = session
        .selected_events()
        .iter()
        .map(|e| (e.id.clone(), e.title.clone()))
        .collect();

    if candidates.is_empty() {
        println!("  {}", "No events on this day".dimmed());
        return Ok(());
    }

    let labels: Vec<&str> = candidates.iter().map(|(_, title)| title.as_str()).collect();
    let choice = Select::new()
        .with_prompt("  Remove which event?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    if let Some(index) = choice {
        let (id, title) = &candidates[index];
        session.remove_event(id)?;
        println!("{}", format!("  Removed: {}", title).red());
    }

    Ok(())
}
