use anyhow::Result;
use chrono::Datelike;
use heatmap_core::Year;
use owo_colors::OwoColorize;

use super::fetch_counts;
use crate::config::Config;
use crate::render::{render_day, render_legend};

pub async fn run(config: &Config, year: Year, json: bool) -> Result<()> {
    let (_, counts) = fetch_counts(config, &year).await?;
    let counts = counts.in_year(&year);

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    if counts.is_empty() {
        println!("{}", format!("No entries found for {}", year).dimmed());
        return Ok(());
    }

    // Group days by month and print
    let mut current_month: Option<u32> = None;

    for (date, count) in counts.iter() {
        if current_month != Some(date.month()) {
            if current_month.is_some() {
                println!();
            }
            println!("{}", date.format("%B %Y").to_string().bold());
            current_month = Some(date.month());
        }

        println!("{}", render_day(date, count));
    }

    println!("\n{}", render_legend());

    Ok(())
}
