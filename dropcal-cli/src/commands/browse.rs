use anyhow::Result;
use dialoguer::Select;
use dropcal_core::clock::Now;
use dropcal_core::navigation::{CalendarController, Navigation};
use dropcal_core::sneaker::Catalog;
use owo_colors::OwoColorize;

use crate::render::{Render, render_drops};

const CHOICES: [Choice; 3] = [
    Choice::Move(Navigation::Previous),
    Choice::Move(Navigation::Next),
    Choice::Quit,
];

#[derive(Clone, Copy)]
enum Choice {
    Move(Navigation),
    Quit,
}

impl Choice {
    fn label(&self) -> String {
        match self {
            Choice::Move(direction) => direction.to_string(),
            Choice::Quit => "Quit".to_string(),
        }
    }
}

pub fn run() -> Result<()> {
    let now = Now::local();
    let catalog = Catalog::sample()?;
    let mut controller = CalendarController::new(&now);
    let mut grid = controller.render(&catalog, &now);

    let items: Vec<String> = CHOICES.iter().map(Choice::label).collect();
    let mut last = 1;

    loop {
        println!("{}", grid.render());
        println!();
        println!("{}", render_drops(&grid, &catalog));
        println!();

        let selection = Select::new()
            .with_prompt("  Navigate")
            .items(&items)
            .default(last)
            .interact()?;
        last = selection;

        match CHOICES[selection] {
            Choice::Move(direction) => {
                grid = controller.navigate(direction, &catalog, &now);
                println!();
            }
            Choice::Quit => break,
        }
    }

    println!("{}", format!("Last viewed: {}", controller.cursor().heading()).dimmed());
    Ok(())
}
