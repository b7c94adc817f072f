// file: src/models/connector_config.rs
// description: validated connector-level configuration
// reference: built only by ConfigValidator, rendered back to properties at the edge

use crate::models::{
    CONTENT_EXTRACTOR, FILES, OUTPUT_TYPE, OutputType, PREFIX, Properties, SCHEMA_NAME, TOPIC,
    join_files,
};
use serde::Serialize;

/// Connector settings after defaults and validation have been applied.
///
/// Instances only come out of [`crate::connector::ConfigValidator`], so the
/// required fields are non-empty and `files` holds at least one non-blank entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorConfiguration {
    pub(crate) schema_name: String,
    pub(crate) topic: String,
    pub(crate) files: Vec<String>,
    pub(crate) content_extractor: String,
    pub(crate) output_type: OutputType,
    pub(crate) files_prefix: String,
}

impl ConnectorConfiguration {
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn content_extractor(&self) -> &str {
        &self.content_extractor
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    pub fn files_prefix(&self) -> &str {
        &self.files_prefix
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn to_properties(&self) -> Properties {
        let mut props = Properties::new();
        props.insert(SCHEMA_NAME.to_string(), self.schema_name.clone());
        props.insert(TOPIC.to_string(), self.topic.clone());
        props.insert(FILES.to_string(), join_files(&self.files));
        props.insert(CONTENT_EXTRACTOR.to_string(), self.content_extractor.clone());
        props.insert(OUTPUT_TYPE.to_string(), self.output_type.to_string());
        props.insert(PREFIX.to_string(), self.files_prefix.clone());
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ConnectorConfiguration {
        ConnectorConfiguration {
            schema_name: "docs".to_string(),
            topic: "documents".to_string(),
            files: vec!["a.pdf".to_string(), "b.docx".to_string()],
            content_extractor: "tika".to_string(),
            output_type: OutputType::Text,
            files_prefix: "archive/".to_string(),
        }
    }

    #[test]
    fn test_to_properties_joins_files() {
        let props = sample().to_properties();

        assert_eq!(props.len(), 6);
        assert_eq!(props[FILES], "a.pdf,b.docx");
        assert_eq!(props[OUTPUT_TYPE], "text");
        assert_eq!(props[PREFIX], "archive/");
    }

    #[test]
    fn test_accessors() {
        let config = sample();
        assert_eq!(config.schema_name(), "docs");
        assert_eq!(config.topic(), "documents");
        assert_eq!(config.file_count(), 2);
        assert_eq!(config.output_type(), OutputType::Text);
    }
}
