use anyhow::Result;
use dropcal_core::catalog::render_catalog;
use dropcal_core::clock::Now;
use dropcal_core::config::DropCalConfig;
use dropcal_core::navigation::CalendarController;
use dropcal_core::sneaker::Catalog;
use owo_colors::OwoColorize;

use crate::render::{Render, render_drops, render_footer};

/// The full page: every card, this month's calendar, then the footer.
pub fn run(config: DropCalConfig) -> Result<()> {
    let now = Now::local();
    let catalog = Catalog::sample()?;

    println!("{}", "Upcoming Drops".bold());
    println!();
    println!("{}", render_catalog(&catalog, &now, config.countdown).render());
    println!();

    let grid = CalendarController::new(&now).render(&catalog, &now);
    println!("{}", grid.render());
    println!();
    println!("{}", render_drops(&grid, &catalog));
    println!();

    println!("{}", render_footer(now.year(), &config.footer));

    Ok(())
}
