use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, Environment, File};
use heatmap_core::{HeatmapError, HeatmapResult};
use serde::Deserialize;

static DEFAULT_DATE_PROPERTY: &str = "Date";
static DEFAULT_OUTPUT_PATH: &str = "heatmap.png";

/// Prefix for environment variables (`NOTION_TOKEN`, `NOTION_DATABASE_ID`, ...)
const ENV_PREFIX: &str = "NOTION";

fn default_date_property() -> String {
    DEFAULT_DATE_PROPERTY.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

/// Settings as read from ~/.config/notion-heatmap/config.toml and the
/// environment, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    token: Option<String>,

    database_id: Option<String>,

    #[serde(default = "default_date_property")]
    date_property: String,

    #[serde(default = "default_output")]
    output: PathBuf,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Notion integration token
    pub token: String,

    /// Database to query
    pub database_id: String,

    /// Name of the date property records are counted by
    pub date_property: String,

    /// Where the image is written (.svg writes SVG, anything else PNG)
    pub output: PathBuf,
}

impl Config {
    pub fn config_path() -> HeatmapResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HeatmapError::Config("Could not determine config directory".into()))?
            .join("notion-heatmap");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the config file (if any) and `NOTION_*` environment variables.
    pub fn load() -> HeatmapResult<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, env: Environment) -> HeatmapResult<Self> {
        let raw: RawConfig = ConfigBuilder::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| HeatmapError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HeatmapError::Config(e.to_string()))?;

        Self::validate(raw, path)
    }

    fn validate(raw: RawConfig, path: &Path) -> HeatmapResult<Self> {
        let token = required(raw.token, "NOTION_TOKEN", "token", path)?;
        let database_id = required(raw.database_id, "NOTION_DATABASE_ID", "database_id", path)?;

        let date_property = raw.date_property.trim().to_string();
        if date_property.is_empty() {
            return Err(HeatmapError::Config("date_property must not be empty".into()));
        }

        Ok(Config {
            token,
            database_id,
            date_property,
            output: expand_path(&raw.output),
        })
    }

    /// Apply command line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, date_property: Option<String>, output: Option<PathBuf>) -> Self {
        if let Some(property) = date_property {
            self.date_property = property;
        }
        if let Some(output) = output {
            self.output = expand_path(&output);
        }
        self
    }
}

fn required(value: Option<String>, env_var: &str, key: &str, path: &Path) -> HeatmapResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HeatmapError::Config(format!(
            "Missing {key}.\n\n\
            Set {env_var} in the environment, or add it to {}:\n\n\
            {key} = \"...\"",
            path.display()
        ))),
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
