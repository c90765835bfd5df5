use anyhow::Result;
use owo_colors::OwoColorize;
use wushu_core::CalendarSession;
use wushu_core::storage::Storage;

pub fn run<S: Storage>(mut session: CalendarSession<S>, id: &str) -> Result<()> {
    let title = session.store().get(id).map(|e| e.title.clone());

    session.remove_event(id)?;

    match title {
        Some(title) => println!("{}", format!("  Removed: {}", title).red()),
        None => println!("{}", format!("  No event with id '{}'", id).dimmed()),
    }

    Ok(())
}
