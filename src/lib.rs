// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod connector;
pub mod error;
pub mod exporter;
pub mod models;
pub mod utils;

pub use crate::config::{AppConfig, TasksConfig};
pub use connector::{
    ConfigValidator, ConnectorState, DocumentSourceConnector, SourceConnector, TaskPartitioner,
};
pub use error::{ConnectorError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use models::{ConnectorConfiguration, FileGroup, OutputType, Properties, TaskConfiguration};
