pub mod base_commands;
pub mod burn_rate_cmd;
pub mod completions_cmd;
pub mod pert_cmd;
pub mod report_format;

use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::services::burn_chart::BurnChartError;
use crate::services::burn_rate::BurnRateError;
use crate::services::histogram::HistogramError;
use crate::services::pert_chart::PertChartError;
use crate::services::pert_export::ExportError;
use crate::services::simulation::SimulationError;
use crate::services::task_yaml::TaskYamlError;
use crate::services::thresholds_yaml::ThresholdsYamlError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    BurnRate(#[from] BurnRateError),
    #[error(transparent)]
    Thresholds(#[from] ThresholdsYamlError),
    #[error(transparent)]
    Tasks(#[from] TaskYamlError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    BurnChart(#[from] BurnChartError),
    #[error(transparent)]
    PertChart(#[from] PertChartError),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
    #[error("invalid start date: {0} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
    #[error("failed to serialize yaml output: {0}")]
    SerializeYaml(#[from] serde_yaml::Error),
    #[error("failed to serialize json output: {0}")]
    SerializeJson(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Serializes `value` to `path`, as JSON when the extension is `.json` and YAML otherwise.
pub(crate) fn write_serialized<T: Serialize>(path: &str, value: &T) -> Result<(), CommandError> {
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let contents = if is_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_yaml::to_string(value)?
    };
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}
