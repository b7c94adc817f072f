// file: src/connector/validator.rs
// description: turns raw connector properties into a validated configuration
// reference: required keys first, then defaults, then the output type check

use crate::error::{ConnectorError, Result};
use crate::models::{
    CONTENT_EXTRACTOR, ConnectorConfiguration, DEFAULT_CONTENT_EXTRACTOR, FILE_SEPARATOR, FILES,
    KNOWN_KEYS, OUTPUT_TYPE, OutputType, PREFIX, Properties, SCHEMA_NAME, TOPIC,
};
use tracing::debug;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(props: &Properties) -> Result<ConnectorConfiguration> {
        let schema_name = Self::required(props, SCHEMA_NAME)?;
        let topic = Self::required(props, TOPIC)?;
        let files = Self::split_files(Self::required(props, FILES)?)?;

        let content_extractor = Self::optional(props, CONTENT_EXTRACTOR)
            .unwrap_or_else(|| {
                debug!("{} not set, using {}", CONTENT_EXTRACTOR, DEFAULT_CONTENT_EXTRACTOR);
                DEFAULT_CONTENT_EXTRACTOR.to_string()
            });

        let output_type = match Self::optional(props, OUTPUT_TYPE) {
            Some(value) => value.parse::<OutputType>()?,
            None => {
                debug!("{} not set, using {}", OUTPUT_TYPE, OutputType::default());
                OutputType::default()
            }
        };

        let files_prefix = Self::optional(props, PREFIX).unwrap_or_default();

        for key in props.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            debug!("Ignoring unknown connector property: {}", key);
        }

        Ok(ConnectorConfiguration {
            schema_name: schema_name.to_string(),
            topic: topic.to_string(),
            files,
            content_extractor,
            output_type,
            files_prefix,
        })
    }

    fn required<'a>(props: &'a Properties, key: &str) -> Result<&'a str> {
        match props.get(key) {
            Some(value) if !value.is_empty() => Ok(value.as_str()),
            _ => Err(ConnectorError::missing(key)),
        }
    }

    fn optional(props: &Properties, key: &str) -> Option<String> {
        props.get(key).filter(|v| !v.is_empty()).cloned()
    }

    /// Splits the comma-separated file list, keeping order and duplicates.
    /// Blank entries are rejected rather than passed on as file names.
    pub fn split_files(raw: &str) -> Result<Vec<String>> {
        raw.split(FILE_SEPARATOR)
            .enumerate()
            .map(|(position, entry)| {
                if entry.trim().is_empty() {
                    Err(ConnectorError::EmptyFileEntry { position })
                } else {
                    Ok(entry.to_string())
                }
            })
            .collect()
    }
}
