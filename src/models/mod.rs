// file: src/models/mod.rs
// description: data models module exports and connector property keys
// reference: internal module structure

pub mod connector_config;
pub mod output_type;
pub mod task_config;

pub use connector_config::ConnectorConfiguration;
pub use output_type::OutputType;
pub use task_config::{FileGroup, TaskConfiguration};

use std::collections::BTreeMap;

/// Raw key/value form of connector and task configuration.
pub type Properties = BTreeMap<String, String>;

pub const SCHEMA_NAME: &str = "schema.name";
pub const TOPIC: &str = "topic";
pub const FILES: &str = "files";
pub const CONTENT_EXTRACTOR: &str = "content.extractor";
pub const OUTPUT_TYPE: &str = "output.type";
pub const PREFIX: &str = "files.prefix";

pub const KNOWN_KEYS: [&str; 6] = [
    SCHEMA_NAME,
    TOPIC,
    FILES,
    CONTENT_EXTRACTOR,
    OUTPUT_TYPE,
    PREFIX,
];

pub const DEFAULT_CONTENT_EXTRACTOR: &str = "tika";
pub const FILE_SEPARATOR: char = ',';

pub fn join_files(files: &[String]) -> String {
    files.join(&FILE_SEPARATOR.to_string())
}
