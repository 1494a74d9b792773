use crate::export::{DEFAULT_EXPORT_FILE, ExportFormat};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio-insights.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export: ExportConfig,
    pub display: DisplayConfig,
    pub filter: FilterConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub file: PathBuf,
    pub format: ExportFormat,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_EXPORT_FILE),
            format: ExportFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Width in characters of the longest timeline bar.
    pub timeline_width: usize,
    /// Print the per-project timeline.
    pub details: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timeline_width: 40,
            details: true,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Skills toggled on right after loading.
    pub skills: Vec<String>,
}

impl Config {
    pub async fn load(file_name: &Path) -> Result<Config> {
        let content = tokio::fs::read_to_string(file_name)
            .await
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Load the given file, or the default file when it exists, or fall back
    /// to built-in defaults.
    pub async fn load_or_default(file_name: Option<&Path>) -> Result<Config> {
        match file_name {
            Some(file_name) => Self::load(file_name).await,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if tokio::fs::try_exists(default).await.unwrap_or(false) {
                    Self::load(default).await
                } else {
                    debug!("no configuration file, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}
