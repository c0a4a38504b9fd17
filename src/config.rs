//! Viewer configuration: an optional TOML file plus command-line overrides.
//!
//! ```toml
//! source = "http://10.192.138.204:5000/data.json"
//! language = "japanese"
//!
//! [window]
//! width = 1200.0
//! height = 800.0
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::data::loader::DataSource;
use crate::error::ConfigError;
use crate::i18n::Language;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sensor-view.toml";

/// Source used when neither the config file nor the CLI names one.
pub const DEFAULT_SOURCE: &str = "data.json";

/// Command line.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "Table and chart viewer for sensor readings")]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Reading source: http(s) URL of data.json, or a .json / .csv path
    #[arg(short = 's', long = "source")]
    pub source: Option<String>,

    /// UI language code (ja, en)
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub source: String,
    pub language: Language,
    pub window: WindowConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            language: Language::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration for a command line.
    ///
    /// An explicit `--config` must be readable; the default file is optional.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)?
                } else {
                    log::debug!("No {DEFAULT_CONFIG_FILE}, using defaults");
                    Self::default()
                }
            }
        };

        if let Some(source) = &cli.source {
            config.source = source.clone();
        }
        if let Some(code) = &cli.lang {
            match Language::from_code(code) {
                Some(lang) => config.language = lang,
                None => log::warn!("Unknown language '{code}', keeping {}", config.language.code()),
            }
        }
        Ok(config)
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.source)
    }
}
