mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dropcal_core::config::DropCalConfig;

#[derive(Parser)]
#[command(name = "dropcal")]
#[command(about = "Browse upcoming sneaker drops and a release calendar")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one card per release
    Catalog {
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a month calendar with drop days marked
    Calendar {
        /// Month to show (1-12), defaults to the current month
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year to show, defaults to the current year
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i32>,

        /// Move this many months forward (or backward if negative)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Step through months interactively
    Browse,
    /// Export all drops as an .ics calendar
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Show config path and effective settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    utils::logging::init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::page::run(load_config()?),
        Some(Commands::Catalog { json }) => commands::catalog::run(load_config()?, json),
        Some(Commands::Calendar {
            month,
            year,
            offset,
            json,
        }) => commands::calendar::run(month, year, offset, json),
        Some(Commands::Browse) => commands::browse::run(),
        Some(Commands::Export { output }) => commands::export::run(output),
        Some(Commands::Config { init }) => commands::config::run(init),
    }
}

fn load_config() -> Result<DropCalConfig> {
    DropCalConfig::load().map_err(|e| anyhow::anyhow!(e))
}
