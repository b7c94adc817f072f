// file: src/exporter/json.rs
// description: json export of generated task configurations

use crate::error::{ConnectorError, Result};
use crate::models::{Properties, TaskConfiguration};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub connector_version: String,
    pub total_tasks: usize,
    pub total_files: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ConnectorError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export_tasks(
        &self,
        tasks: &[TaskConfiguration],
        pretty: bool,
    ) -> Result<ExportManifest> {
        info!(
            "Exporting {} task configurations to {:?}",
            tasks.len(),
            self.output_dir
        );

        let mut files = Vec::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            let name = format!("task-{}.json", index);
            self.write_json(&name, &task.to_properties(), pretty)?;
            debug!("Wrote {} ({} files)", name, task.files.len());
            files.push(name);
        }

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            connector_version: env!("CARGO_PKG_VERSION").to_string(),
            total_tasks: tasks.len(),
            total_files: tasks.iter().map(|t| t.files.len()).sum(),
            files,
        };
        self.write_json("manifest.json", &manifest, pretty)?;

        info!("Export complete: {} task files written", manifest.total_tasks);
        Ok(manifest)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T, pretty: bool) -> Result<()> {
        let body = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let path = self.output_dir.join(name);
        fs::write(&path, body).map_err(|source| ConnectorError::FileOperation { path, source })
    }
}

/// Renders tasks as a JSON array of property maps, in task order.
pub fn tasks_to_json(tasks: &[TaskConfiguration], pretty: bool) -> Result<String> {
    let props: Vec<Properties> = tasks.iter().map(TaskConfiguration::to_properties).collect();
    let body = if pretty {
        serde_json::to_string_pretty(&props)?
    } else {
        serde_json::to_string(&props)?
    };
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{ConfigValidator, TaskPartitioner};
    use std::num::NonZeroUsize;
    use tempfile::tempdir;

    fn sample_tasks() -> Vec<TaskConfiguration> {
        let props: Properties = [
            ("schema.name", "docs"),
            ("topic", "documents"),
            ("files", "a,b,c,d,e"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let config = ConfigValidator::validate(&props).unwrap();
        TaskPartitioner::partition(&config, NonZeroUsize::new(2).unwrap())
    }

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested/out"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested/out").is_dir());
    }

    #[test]
    fn test_export_tasks_writes_files_and_manifest() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let manifest = exporter.export_tasks(&sample_tasks(), true).unwrap();
        assert_eq!(manifest.total_tasks, 2);
        assert_eq!(manifest.total_files, 5);
        assert_eq!(manifest.files, vec!["task-0.json", "task-1.json"]);

        let first: Properties =
            serde_json::from_str(&fs::read_to_string(dir.path().join("task-0.json")).unwrap())
                .unwrap();
        assert_eq!(first["files"], "a,b,c");
        assert_eq!(first["output.type"], "text_xml");

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(written["total_tasks"], 2);
        assert_eq!(written["connector_version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_tasks_to_json_keeps_order() {
        let json = tasks_to_json(&sample_tasks(), false).unwrap();
        let parsed: Vec<Properties> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["files"], "a,b,c");
        assert_eq!(parsed[1]["files"], "d,e");
    }
}
