//! Core types for notion-heatmap.
//!
//! This crate turns date-bearing records into a calendar heatmap scene:
//! - `record` and `date_count` aggregate records into per-day counts
//! - `year`, `layout` and `palette` hold the fixed calendar grid rules
//! - `scene` and `svg` describe the finished picture for a rasterizer

pub mod constants;
pub mod date_count;
pub mod error;
pub mod layout;
pub mod palette;
pub mod record;
pub mod scene;
pub mod svg;
pub mod year;

pub use date_count::DateCount;
pub use error::{HeatmapError, HeatmapResult};
pub use palette::ColorBucket;
pub use record::Record;
pub use scene::Scene;
pub use year::Year;
