// file: src/connector/lifecycle.rs
// description: document source connector holding validated configuration between lifecycle calls
// reference: unconfigured -> configured -> stopped, restartable

use crate::connector::{ConfigValidator, SourceConnector, TaskPartitioner};
use crate::error::{ConnectorError, Result};
use crate::models::{ConnectorConfiguration, Properties, TaskConfiguration};
use std::num::NonZeroUsize;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectorState {
    #[default]
    Unconfigured,
    Configured(ConnectorConfiguration),
    Stopped,
}

#[derive(Debug, Default)]
pub struct DocumentSourceConnector {
    state: ConnectorState,
}

impl DocumentSourceConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConnectorState {
        &self.state
    }

    pub fn configuration(&self) -> Option<&ConnectorConfiguration> {
        match &self.state {
            ConnectorState::Configured(config) => Some(config),
            _ => None,
        }
    }
}

impl SourceConnector for DocumentSourceConnector {
    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn start(&mut self, props: &Properties) -> Result<()> {
        // A failed start never leaves an older configuration in place.
        self.state = ConnectorState::Unconfigured;

        let config = ConfigValidator::validate(props).inspect_err(|e| {
            warn!("Connector configuration rejected: {}", e);
        })?;

        info!(
            "Document source connector started: topic={}, schema={}, {} files, output={}",
            config.topic(),
            config.schema_name(),
            config.file_count(),
            config.output_type()
        );
        self.state = ConnectorState::Configured(config);
        Ok(())
    }

    fn task_configs(&self, max_tasks: NonZeroUsize) -> Result<Vec<TaskConfiguration>> {
        let config = self.configuration().ok_or(ConnectorError::NotStarted)?;
        let tasks = TaskPartitioner::partition(config, max_tasks);
        info!("Generated {} task configurations", tasks.len());
        Ok(tasks)
    }

    fn stop(&mut self) {
        if matches!(self.state, ConnectorState::Configured(_)) {
            info!("Document source connector stopped");
        }
        self.state = ConnectorState::Stopped;
    }
}
