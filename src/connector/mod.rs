// file: src/connector/mod.rs
// description: connector validation, partitioning and lifecycle exports
// reference: internal module structure

pub mod lifecycle;
pub mod partitioner;
pub mod validator;

pub use lifecycle::{ConnectorState, DocumentSourceConnector};
pub use partitioner::{TaskPartitioner, group_partitions};
pub use validator::ConfigValidator;

use crate::error::Result;
use crate::models::{Properties, TaskConfiguration};
use std::num::NonZeroUsize;

/// Lifecycle a host drives a source connector through.
pub trait SourceConnector {
    fn version(&self) -> &'static str;

    /// Validates `props` and keeps the result for later task generation.
    fn start(&mut self, props: &Properties) -> Result<()>;

    /// One configuration per worker, at most `max_tasks` of them.
    fn task_configs(&self, max_tasks: NonZeroUsize) -> Result<Vec<TaskConfiguration>>;

    fn stop(&mut self);
}
