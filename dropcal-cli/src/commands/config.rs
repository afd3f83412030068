use anyhow::Result;
use dropcal_core::config::DropCalConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let config_path = DropCalConfig::config_path().map_err(|e| anyhow::anyhow!(e))?;

    if init {
        if config_path.exists() {
            println!("{}", "Config file already exists".dimmed());
        } else {
            DropCalConfig::create_default_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
            println!("{} {}", "Created".green(), config_path.display());
        }
        println!();
    }

    let config = DropCalConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml().map_err(|e| anyhow::anyhow!(e))?.lines() {
        println!("  {line}");
    }

    Ok(())
}
