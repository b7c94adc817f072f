// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ConnectorError, Result};
use crate::models::{KNOWN_KEYS, Properties};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, warn};

const ENV_PREFIX: &str = "DOC_CONNECTOR";
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Raw connector properties, validated later by the connector itself.
    #[serde(default)]
    pub connector: Properties,
    #[serde(default)]
    pub tasks: TasksConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TasksConfig {
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

fn default_max_tasks() -> usize {
    1
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            max_tasks: default_max_tasks(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// An explicit path must load; without one, the default file is tried and
    /// the built-in sample is used if that fails.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(Some(path)),
            None => Ok(Self::load(None).unwrap_or_else(|e| {
                warn!("Falling back to built-in defaults: {}", e);
                Self::default_config()
            })),
        }
    }

    fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ConnectorError::Config(e.to_string()))?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| ConnectorError::Config(e.to_string()))?;

        config.normalize_connector_keys();
        config.validate()?;
        Ok(config)
    }

    /// Environment variables cannot carry dots, so `output_type` and friends
    /// are folded back onto their dotted property names. The underscore form
    /// wins since environment sources are applied after the file.
    fn normalize_connector_keys(&mut self) {
        for key in KNOWN_KEYS {
            let alias = key.replace('.', "_");
            if alias == key {
                continue;
            }
            if let Some(value) = self.connector.remove(&alias) {
                debug!("Using {} for connector property {}", alias, key);
                self.connector.insert(key.to_string(), value);
            }
        }
    }

    pub fn default_config() -> Self {
        let connector = [
            ("schema.name", "documents"),
            ("topic", "documents"),
            ("files", "docs/report.pdf,docs/notes.docx,docs/slides.pptx"),
            ("content.extractor", "tika"),
            ("output.type", "text_xml"),
            ("files.prefix", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            connector,
            tasks: TasksConfig::default(),
        }
    }

    /// Applies `key=value` overrides on top of the loaded connector properties.
    pub fn apply_overrides<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            self.connector.insert(key.into(), value.into());
        }
    }

    pub fn max_tasks(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.tasks.max_tasks)
            .ok_or_else(|| ConnectorError::Config("max_tasks must be greater than 0".to_string()))
    }

    /// `--max-tasks` from the command line takes precedence over `tasks.max_tasks`.
    pub fn resolve_max_tasks(&self, requested: Option<NonZeroUsize>) -> Result<NonZeroUsize> {
        match requested {
            Some(max_tasks) => Ok(max_tasks),
            None => self.max_tasks(),
        }
    }

    fn validate(&self) -> Result<()> {
        self.max_tasks()?;
        Ok(())
    }
}

/// Parses a `key=value` pair as given on the command line.
pub fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
