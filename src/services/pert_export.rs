use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::estimate::{EstimateTask, TaskEstimate};
use crate::services::pert::summarize;

pub const CSV_HEADER: &str = "Task,Optimistic,Most Likely,Pessimistic,PERT Estimate,Std Dev";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Renders the task table as CSV with a trailing totals row.
///
/// Input columns keep their shortest round-trip form; derived columns are
/// fixed to two decimals. `tasks` and `estimates` are expected to line up.
pub fn render_pert_csv(tasks: &[EstimateTask], estimates: &[TaskEstimate]) -> String {
    let totals = summarize(tasks, estimates);

    let mut lines = Vec::with_capacity(tasks.len() + 2);
    lines.push(CSV_HEADER.to_string());
    for (task, estimate) in tasks.iter().zip(estimates) {
        lines.push(format!(
            "{},{},{},{},{:.2},{:.2}",
            escape_field(&task.name),
            task.optimistic,
            task.likely,
            task.pessimistic,
            estimate.pert_estimate,
            estimate.standard_deviation
        ));
    }
    lines.push(format!(
        "Total,{},,{},{:.2},",
        totals.optimistic, totals.pessimistic, totals.pert_estimate
    ));

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

/// Used when a project name has no alphanumeric characters at all.
const FALLBACK_SLUG: &str = "project";

/// Collapses every run of non-alphanumeric characters into `-` and lower-cases the rest.
/// A name without any alphanumerics becomes [`FALLBACK_SLUG`].
pub fn slugify(project_name: &str) -> String {
    let mut slug = String::with_capacity(project_name.len());
    let mut in_separator = false;
    for ch in project_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }
    if slug.chars().all(|ch| ch == '-') {
        return FALLBACK_SLUG.to_string();
    }
    slug
}

pub fn export_file_name(project_name: &str) -> String {
    format!("{}-pert-estimate.csv", slugify(project_name))
}

/// Writes the CSV export into `dir` and returns the full path of the new file.
pub fn write_pert_csv(
    dir: &Path,
    project_name: &str,
    tasks: &[EstimateTask],
    estimates: &[TaskEstimate],
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(project_name));
    std::fs::write(&path, render_pert_csv(tasks, estimates)).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
