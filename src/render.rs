//! Terminal rendering for heatmap types.
//!
//! Extension traits that add colored output to heatmap-core types using
//! owo_colors.

use chrono::NaiveDate;
use heatmap_core::{ColorBucket, DateCount, Scene};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ColorBucket {
    /// A block in the bucket's fill color
    fn render(&self) -> String {
        let (r, g, b) = self.rgb();
        "■".truecolor(r, g, b).to_string()
    }
}

/// Color legend from lightest to darkest, like the one under GitHub's graph.
pub fn render_legend() -> String {
    let blocks: Vec<String> = ColorBucket::ALL.iter().map(|b| b.render()).collect();
    format!("{} {} {}", "Less".dimmed(), blocks.join(" "), "More".dimmed())
}

/// One line per active day: date, bucket block and count.
pub fn render_day(date: NaiveDate, count: u32) -> String {
    let bucket = ColorBucket::for_count(count);
    format!(
        "  {} {} {}",
        date.format("%a %b %e").to_string().dimmed(),
        bucket.render(),
        count.bold()
    )
}

/// Summary printed after a run.
pub fn render_summary(records: usize, counts: &DateCount, scene: &Scene) -> String {
    let mut lines = vec![format!(
        "   {} {} from {} {} on {} active {}",
        counts.total().bold(),
        pluralize("entry", counts.total() as usize),
        records,
        pluralize("record", records),
        counts.active_days(),
        pluralize("day", counts.active_days()),
    )];

    if let Some((date, count)) = counts.busiest() {
        lines.push(format!(
            "   Busiest day: {} ({} {})",
            date.format("%Y-%m-%d").to_string().bold(),
            count,
            pluralize("entry", count as usize)
        ));
    }

    let hidden = counts
        .in_year(&scene.year)
        .iter()
        .filter(|(date, _)| scene.cell(*date).is_none())
        .count();
    if hidden > 0 {
        lines.push(
            format!(
                "   {} active {} fall in a sixth week and are not drawn",
                hidden,
                pluralize("day", hidden)
            )
            .yellow()
            .to_string(),
        );
    }

    lines.push(format!("   {}", render_legend()));
    lines.join("\n")
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "entry" => "entries",
            "record" => "records",
            "day" => "days",
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("entry", 1), "entry");
        assert_eq!(pluralize("entry", 2), "entries");
        assert_eq!(pluralize("day", 0), "days");
    }
}
