pub mod counts;
pub mod render;

use std::time::Duration;

use anyhow::Result;
use heatmap_core::{DateCount, Record, Year};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::notion::NotionClient;

/// Spinner shown while waiting on the network
pub fn create_spinner(message: String) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/", "-"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner().with_style(style).with_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Fetch the year's records from Notion and count them per day.
pub async fn fetch_counts(config: &Config, year: &Year) -> Result<(Vec<Record>, DateCount)> {
    let client = NotionClient::new(&config.token)?;

    let spinner = create_spinner(format!(
        "Fetching {} entries for {}",
        config.date_property.bold(),
        year
    ));
    let result = client
        .query_year(&config.database_id, &config.date_property, year)
        .await;
    spinner.finish_and_clear();

    let records = result?;
    let counts = DateCount::from_records(&records);

    Ok((records, counts))
}
