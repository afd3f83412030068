use anyhow::{Context, Result};
use chrono::Datelike;
use dropcal_core::clock::Now;
use dropcal_core::cursor::CalendarCursor;
use dropcal_core::navigation::CalendarController;
use dropcal_core::sneaker::Catalog;

use crate::render::{Render, render_drops};

pub fn run(month: Option<u32>, year: Option<i32>, offset: i64, json: bool) -> Result<()> {
    let now = Now::local();
    let catalog = Catalog::sample()?;

    let mut cursor = resolve_cursor(month, year, &now)?;
    cursor.offset(offset);

    let grid = CalendarController::with_cursor(cursor).render(&catalog, &now);

    if json {
        let out = serde_json::to_string_pretty(&grid).context("Failed to serialize calendar")?;
        println!("{out}");
    } else {
        println!("{}", grid.render());
        println!();
        println!("{}", render_drops(&grid, &catalog));
    }

    Ok(())
}

/// `month` is 1-based as typed by the user; missing parts come from today.
fn resolve_cursor(month: Option<u32>, year: Option<i32>, now: &Now) -> Result<CalendarCursor> {
    let month0 = month.map_or(now.today.month0(), |m| m.saturating_sub(1));
    let year = year.unwrap_or(now.today.year());

    CalendarCursor::new(month0, year).map_err(|e| anyhow::anyhow!(e))
}
