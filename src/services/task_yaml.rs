use std::collections::HashSet;
use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::estimate::EstimateTask;

#[derive(Error, Debug)]
pub enum TaskYamlError {
    #[error("failed to read task yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse task yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing task id")]
    MissingTaskId,
    #[error("duplicate task id: {0}")]
    DuplicateTaskId(String),
    #[error("task {0} has a non-finite estimate")]
    NonFinite(String),
}

#[derive(Deserialize)]
struct TaskRecord {
    id: String,
    name: Option<String>,
    optimistic: f64,
    likely: f64,
    pessimistic: f64,
}

pub fn load_tasks_from_yaml_file(path: &str) -> Result<Vec<EstimateTask>, TaskYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_tasks_from_yaml_str(&contents)
}

/// Parses a YAML list of tasks. A missing `name` falls back to the id.
pub fn deserialize_tasks_from_yaml_str(input: &str) -> Result<Vec<EstimateTask>, TaskYamlError> {
    let records: Vec<TaskRecord> = serde_yaml::from_str(input)?;
    let mut seen = HashSet::with_capacity(records.len());
    let mut tasks = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id.trim().to_string();
        if id.is_empty() {
            return Err(TaskYamlError::MissingTaskId);
        }
        if !seen.insert(id.clone()) {
            return Err(TaskYamlError::DuplicateTaskId(id));
        }
        if ![record.optimistic, record.likely, record.pessimistic]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(TaskYamlError::NonFinite(id));
        }
        let name = record.name.unwrap_or_else(|| id.clone());
        tasks.push(EstimateTask::new(
            &id,
            &name,
            record.optimistic,
            record.likely,
            record.pessimistic,
        ));
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML_CONTENT: &str = r#"
- id: T1
  name: Requirements
  optimistic: 3
  likely: 5
  pessimistic: 8
- id: T2
  optimistic: 10
  likely: 15
  pessimistic: 25.5
"#;

    #[test]
    fn deserialize_tasks_keeps_order_and_defaults_name() {
        let tasks = deserialize_tasks_from_yaml_str(YAML_CONTENT).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], EstimateTask::new("T1", "Requirements", 3.0, 5.0, 8.0));
        assert_eq!(tasks[1].id, "T2");
        assert_eq!(tasks[1].name, "T2");
        assert_eq!(tasks[1].pessimistic, 25.5);
    }

    #[test]
    fn deserialize_tasks_accepts_empty_list() {
        let tasks = deserialize_tasks_from_yaml_str("[]").unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn deserialize_tasks_rejects_missing_id() {
        let yaml = "- id: ' '\n  optimistic: 1\n  likely: 2\n  pessimistic: 3\n";
        let error = deserialize_tasks_from_yaml_str(yaml).expect_err("expected missing id");
        assert!(matches!(error, TaskYamlError::MissingTaskId));
    }

    #[test]
    fn deserialize_tasks_rejects_duplicate_ids() {
        let yaml = "- id: A\n  optimistic: 1\n  likely: 2\n  pessimistic: 3\n- id: A\n  optimistic: 1\n  likely: 2\n  pessimistic: 3\n";
        let error = deserialize_tasks_from_yaml_str(yaml).expect_err("expected duplicate id");
        assert!(matches!(error, TaskYamlError::DuplicateTaskId(id) if id == "A"));
    }

    #[test]
    fn deserialize_tasks_rejects_non_finite_values() {
        let yaml = "- id: A\n  optimistic: .nan\n  likely: 2\n  pessimistic: 3\n";
        let error = deserialize_tasks_from_yaml_str(yaml).expect_err("expected non-finite error");
        assert!(matches!(error, TaskYamlError::NonFinite(id) if id == "A"));
    }

    #[test]
    fn deserialize_tasks_rejects_missing_estimate() {
        let yaml = "- id: A\n  optimistic: 1\n  likely: 2\n";
        let error = deserialize_tasks_from_yaml_str(yaml).expect_err("expected parse error");
        assert!(matches!(error, TaskYamlError::Parse(_)));
    }
}
