use std::path::PathBuf;

use anyhow::{Context, Result};
use dropcal_core::ics::generate_ics;
use dropcal_core::sneaker::Catalog;
use owo_colors::OwoColorize;

pub fn run(output: Option<PathBuf>) -> Result<()> {
    let catalog = Catalog::sample()?;
    let ics = generate_ics(&catalog, chrono::Utc::now())?;

    match output {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing ics export");
            std::fs::write(&path, ics)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!(
                "{} {} {}",
                "Exported".green(),
                catalog.len(),
                format!("drops to {}", path.display()).dimmed()
            );
        }
        None => print!("{ics}"),
    }

    Ok(())
}
