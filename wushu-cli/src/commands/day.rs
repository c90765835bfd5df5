use anyhow::Result;
use wushu_core::CalendarSession;
use wushu_core::storage::Storage;

use crate::render::render_day;

pub fn run<S: Storage>(mut session: CalendarSession<S>, date: Option<String>) -> Result<()> {
    if let Some(key) = date {
        session.select_date(&key)?;
    }

    println!(
        "{}",
        render_day(session.selected_date(), &session.selected_events())
    );

    Ok(())
}
