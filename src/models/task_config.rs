// file: src/models/task_config.rs
// description: per-worker task configuration and its file group

use crate::models::{
    CONTENT_EXTRACTOR, FILES, OUTPUT_TYPE, OutputType, PREFIX, Properties, SCHEMA_NAME, TOPIC,
    join_files,
};
use serde::Serialize;

/// Ordered, non-empty slice of the connector's file list owned by one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileGroup(Vec<String>);

impl FileGroup {
    pub(crate) fn new(files: Vec<String>) -> Self {
        debug_assert!(!files.is_empty(), "file groups are never empty");
        Self(files)
    }

    pub fn files(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn joined(&self) -> String {
        join_files(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskConfiguration {
    pub schema_name: String,
    pub topic: String,
    pub content_extractor: String,
    pub output_type: OutputType,
    pub files_prefix: String,
    pub files: FileGroup,
}

impl TaskConfiguration {
    pub fn to_properties(&self) -> Properties {
        let mut props = Properties::new();
        props.insert(FILES.to_string(), self.files.joined());
        props.insert(SCHEMA_NAME.to_string(), self.schema_name.clone());
        props.insert(TOPIC.to_string(), self.topic.clone());
        props.insert(CONTENT_EXTRACTOR.to_string(), self.content_extractor.clone());
        props.insert(OUTPUT_TYPE.to_string(), self.output_type.to_string());
        props.insert(PREFIX.to_string(), self.files_prefix.clone());
        props
    }
}
