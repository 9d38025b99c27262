use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Column width of labels in table output.
pub const DEFAULT_LABEL_WIDTH: usize = 14;
pub const ENV_PREFIX: &str = "CRONEXP_";

/// Top-level config (cronexp.toml + CRONEXP_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CronexpConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// How an expanded schedule is written to stdout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Table (default) or JSON.
    /// Override with env var: CRONEXP_OUTPUT__FORMAT=json
    #[serde(default)]
    pub format: OutputFormat,
    /// Column width of the label in table output.
    #[serde(default = "default_label_width")]
    pub label_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn default_label_width() -> usize {
    DEFAULT_LABEL_WIDTH
}

impl CronexpConfig {
    /// Load config from a TOML file with CRONEXP_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.cronexp/cronexp.toml
    ///
    /// A missing file is not an error; every key has a default.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);
        debug!(%path, "loading config");

        let config: CronexpConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| crate::error::CoreError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.cronexp/cronexp.toml", home)
}
