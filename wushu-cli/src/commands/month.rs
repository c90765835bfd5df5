use anyhow::Result;
use wushu_core::CalendarSession;
use wushu_core::storage::Storage;

use crate::render::{Render, render_day};

pub fn run<S: Storage>(
    mut session: CalendarSession<S>,
    shift: i32,
    select: Option<String>,
) -> Result<()> {
    session.shift_month(shift);
    if let Some(key) = select {
        session.select_date(&key)?;
    }

    println!("{}", session.month_grid().render());
    println!();
    println!(
        "{}",
        render_day(session.selected_date(), &session.selected_events())
    );

    Ok(())
}
