// file: src/connector/partitioner.rs
// description: balanced partitioning of the file list into task configurations
// reference: contiguous groups, earlier groups absorb the remainder

use crate::models::{ConnectorConfiguration, FileGroup, TaskConfiguration};
use std::num::NonZeroUsize;
use tracing::debug;

/// Splits `elements` into `num_groups` contiguous groups whose sizes differ by
/// at most one. The first `len % num_groups` groups get the extra element.
///
/// Groups come back empty when there are more groups than elements.
pub fn group_partitions<T: Clone>(elements: &[T], num_groups: NonZeroUsize) -> Vec<Vec<T>> {
    let num_groups = num_groups.get();
    let per_group = elements.len() / num_groups;
    let leftover = elements.len() % num_groups;

    let mut groups = Vec::with_capacity(num_groups);
    let mut start = 0;
    for group in 0..num_groups {
        let size = per_group + usize::from(group < leftover);
        groups.push(elements[start..start + size].to_vec());
        start += size;
    }
    groups
}

pub struct TaskPartitioner;

impl TaskPartitioner {
    pub fn group_count(file_count: usize, max_tasks: NonZeroUsize) -> usize {
        file_count.min(max_tasks.get())
    }

    pub fn partition(
        config: &ConnectorConfiguration,
        max_tasks: NonZeroUsize,
    ) -> Vec<TaskConfiguration> {
        let files = config.files();
        let group_count = Self::group_count(files.len(), max_tasks);

        // Unreachable: validation rejects an empty file list.
        let Some(num_groups) = NonZeroUsize::new(group_count) else {
            return Vec::new();
        };

        let groups = group_partitions(files, num_groups);
        debug!(
            "Partitioned {} files into {} groups (max tasks {}): sizes {:?}",
            files.len(),
            group_count,
            max_tasks,
            groups.iter().map(Vec::len).collect::<Vec<_>>()
        );

        groups
            .into_iter()
            .map(|group| TaskConfiguration {
                schema_name: config.schema_name().to_string(),
                topic: config.topic().to_string(),
                content_extractor: config.content_extractor().to_string(),
                output_type: config.output_type(),
                files_prefix: config.files_prefix().to_string(),
                files: FileGroup::new(group),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ConfigValidator;
    use crate::models::{OutputType, Properties};
    use pretty_assertions::assert_eq;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn config_with_files(files: &str) -> ConnectorConfiguration {
        let props: Properties = [
            ("schema.name", "docs"),
            ("topic", "documents"),
            ("files", files),
            ("output.type", "xml_text"),
            ("files.prefix", "pre_"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ConfigValidator::validate(&props).unwrap()
    }

    fn file_groups(tasks: &[TaskConfiguration]) -> Vec<Vec<String>> {
        tasks.iter().map(|t| t.files.files().to_vec()).collect()
    }

    #[test]
    fn test_five_files_two_tasks() {
        let tasks = TaskPartitioner::partition(&config_with_files("a,b,c,d,e"), nz(2));

        assert_eq!(
            file_groups(&tasks),
            vec![vec!["a", "b", "c"], vec!["d", "e"]]
        );
        assert_eq!(tasks[0].to_properties()["files"], "a,b,c");
        assert_eq!(tasks[1].to_properties()["files"], "d,e");
    }

    #[test]
    fn test_more_tasks_than_files() {
        let tasks = TaskPartitioner::partition(&config_with_files("a,b"), nz(5));

        assert_eq!(tasks.len(), 2);
        assert_eq!(file_groups(&tasks), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_single_task_gets_everything() {
        let tasks = TaskPartitioner::partition(&config_with_files("a,b,c"), nz(1));
        assert_eq!(file_groups(&tasks), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_shared_fields_copied() {
        let config = config_with_files("a,b,c,d");
        for task in TaskPartitioner::partition(&config, nz(3)) {
            assert_eq!(task.schema_name, "docs");
            assert_eq!(task.topic, "documents");
            assert_eq!(task.content_extractor, "tika");
            assert_eq!(task.output_type, OutputType::XmlText);
            assert_eq!(task.files_prefix, "pre_");
        }
    }

    #[test]
    fn test_duplicates_preserved() {
        let tasks = TaskPartitioner::partition(&config_with_files("x,x,y"), nz(2));
        assert_eq!(file_groups(&tasks), vec![vec!["x", "x"], vec!["y"]]);
    }

    #[test]
    fn test_partition_properties_hold() {
        for file_count in 1..=23 {
            let names: Vec<String> = (0..file_count).map(|i| format!("f{}", i)).collect();
            let config = config_with_files(&names.join(","));

            for max_tasks in 1..=30 {
                let tasks = TaskPartitioner::partition(&config, nz(max_tasks));
                let expected_groups = file_count.min(max_tasks);
                assert_eq!(tasks.len(), expected_groups);

                let sizes: Vec<usize> = tasks.iter().map(|t| t.files.len()).collect();
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                assert!(min >= 1);
                assert!(max - min <= 1);
                assert_eq!(sizes.iter().sum::<usize>(), file_count);

                let larger = file_count % expected_groups;
                for (i, size) in sizes.iter().enumerate() {
                    let want = file_count / expected_groups + usize::from(i < larger);
                    assert_eq!(*size, want);
                }

                let rebuilt: Vec<String> = tasks
                    .iter()
                    .flat_map(|t| t.files.files().iter().cloned())
                    .collect();
                assert_eq!(rebuilt, names);
            }
        }
    }

    #[test]
    fn test_partition_is_deterministic() {
        let config = config_with_files("a,b,c,d,e,f,g");
        assert_eq!(
            TaskPartitioner::partition(&config, nz(3)),
            TaskPartitioner::partition(&config, nz(3))
        );
    }

    #[test]
    fn test_group_partitions_generic() {
        let groups = group_partitions(&[1, 2, 3, 4, 5, 6, 7], nz(3));
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]);
    }

    #[test]
    fn test_group_partitions_more_groups_than_elements() {
        let groups = group_partitions(&["a"], nz(3));
        assert_eq!(groups, vec![vec!["a"], vec![], vec![]]);
    }

    #[test]
    fn test_group_count() {
        assert_eq!(TaskPartitioner::group_count(5, nz(2)), 2);
        assert_eq!(TaskPartitioner::group_count(2, nz(5)), 2);
        assert_eq!(TaskPartitioner::group_count(4, nz(4)), 4);
    }
}
