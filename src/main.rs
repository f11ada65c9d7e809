mod commands;
mod config;
mod notion;
mod raster;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use heatmap_core::Year;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "notion-heatmap")]
#[command(about = "Render a year of Notion database entries as a calendar heatmap")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch entries and write the heatmap image
    Render {
        /// Year to render (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Output path; ".svg" writes SVG, anything else PNG
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Date property to count entries by (e.g. "Date")
        #[arg(short, long)]
        property: Option<String>,
    },
    /// Fetch entries and print how many fall on each day
    Counts {
        /// Year to count (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Date property to count entries by (e.g. "Date")
        #[arg(short, long)]
        property: Option<String>,

        /// Print the per-day counts as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            year,
            output,
            property,
        } => {
            let config = Config::load()?.with_overrides(property, output);
            let year = resolve_year(year)?;
            commands::render::run(&config, year).await
        }
        Commands::Counts {
            year,
            property,
            json,
        } => {
            let config = Config::load()?.with_overrides(property, None);
            let year = resolve_year(year)?;
            commands::counts::run(&config, year, json).await
        }
    }
}

fn resolve_year(year: Option<i32>) -> Result<Year> {
    let value = year.unwrap_or_else(|| Local::now().year());
    Ok(Year::new(value)?)
}
