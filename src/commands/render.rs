use anyhow::Result;
use heatmap_core::{Scene, Year};
use owo_colors::OwoColorize;

use super::fetch_counts;
use crate::config::Config;
use crate::raster;
use crate::render::render_summary;

pub async fn run(config: &Config, year: Year) -> Result<()> {
    let (records, counts) = fetch_counts(config, &year).await?;

    let scene = Scene::render(&counts, &year);
    raster::write_output(&scene, &config.output)?;

    println!("🗓  {}", year.bold());
    println!("{}", render_summary(records.len(), &counts, &scene));
    println!(
        "\nWrote {}",
        config.output.display().to_string().green()
    );

    Ok(())
}
