use anyhow::{Context, Result};
use dropcal_core::catalog::render_catalog;
use dropcal_core::clock::Now;
use dropcal_core::config::DropCalConfig;
use dropcal_core::sneaker::Catalog;

use crate::render::Render;

pub fn run(config: DropCalConfig, json: bool) -> Result<()> {
    let now = Now::local();
    let catalog = Catalog::sample()?;
    let cards = render_catalog(&catalog, &now, config.countdown);

    if json {
        let out = serde_json::to_string_pretty(&cards).context("Failed to serialize cards")?;
        println!("{out}");
    } else {
        println!("{}", cards.render());
    }

    Ok(())
}
