//! TUI rendering traits for dropcal types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to dropcal-core types using owo_colors.

use dropcal_core::catalog::SneakerCard;
use dropcal_core::countdown::Countdown;
use dropcal_core::date::WEEKDAY_LABELS;
use dropcal_core::grid::{CalendarCell, CalendarGrid, DROP_INDICATOR, DayCell};
use dropcal_core::sneaker::Catalog;
use owo_colors::OwoColorize;

/// Width of one calendar column, including the separating space.
const CELL_WIDTH: usize = 5;

/// Short form of the drop indicator inside a grid cell.
const DROP_MARKER: &str = "*";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Countdown {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            Countdown::Upcoming(_) => label.yellow().to_string(),
            Countdown::Today => label.green().bold().to_string(),
            Countdown::Released => label.dimmed().to_string(),
        }
    }
}

impl Render for SneakerCard {
    fn render(&self) -> String {
        let lines = [
            format!("{} {}", self.tag.glyph(), self.brand.to_uppercase().dimmed()),
            format!("  {}", self.name.bold()),
            format!("  📅 {}", self.release_label),
            format!("  {}", self.countdown.render()),
            format!("  {}", self.price.bold()),
            format!("  {}", format!("Color: {}", self.color).dimmed()),
        ];
        lines.join("\n")
    }
}

impl Render for [SneakerCard] {
    fn render(&self) -> String {
        if self.is_empty() {
            return "No releases".dimmed().to_string();
        }

        self.iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Render for DayCell {
    fn render(&self) -> String {
        let marker = if self.indicator.is_some() { DROP_MARKER } else { " " };
        let text = format!("{:>3}{}", self.day, marker);

        match (self.is_today, self.is_release) {
            (true, true) => text.green().bold().reversed().to_string(),
            (true, false) => text.bold().reversed().to_string(),
            (false, true) => text.green().bold().to_string(),
            (false, false) => text,
        }
    }
}

impl Render for CalendarCell {
    fn render(&self) -> String {
        match self {
            CalendarCell::Blank => " ".repeat(CELL_WIDTH - 1),
            CalendarCell::Day(day) => day.render(),
        }
    }
}

impl Render for CalendarGrid {
    fn render(&self) -> String {
        let width = CELL_WIDTH * WEEKDAY_LABELS.len();
        let mut lines = Vec::new();

        lines.push(format!("{:^width$}", self.heading).bold().to_string());
        lines.push(
            WEEKDAY_LABELS
                .iter()
                .map(|label| format!("{label:>4}"))
                .collect::<Vec<_>>()
                .join(" ")
                .dimmed()
                .to_string(),
        );

        for week in self.weeks() {
            let row = week.iter().map(Render::render).collect::<Vec<_>>().join(" ");
            lines.push(row.trim_end().to_string());
        }

        let legend = format!("{DROP_MARKER} {DROP_INDICATOR}");
        lines.push(format!("{:>width$}", legend).green().to_string());

        lines.join("\n")
    }
}

/// List each drop day of the grid with the releases behind it.
pub fn render_drops(grid: &CalendarGrid, catalog: &Catalog) -> String {
    let mut lines = Vec::new();

    for day in grid.release_days() {
        let names: Vec<&str> = day
            .release_ids
            .iter()
            .filter_map(|id| catalog.get(*id))
            .map(|r| r.name.as_str())
            .collect();
        lines.push(format!(
            "  {:>2} {} {}",
            day.day,
            DROP_INDICATOR.green().bold(),
            names.join(", ")
        ));
    }

    if lines.is_empty() {
        return "  No drops this month".dimmed().to_string();
    }

    lines.join("\n")
}

pub fn render_footer(year: i32, label: &str) -> String {
    format!("© {year} {label}").dimmed().to_string()
}
