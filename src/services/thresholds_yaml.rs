use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::burn_rate::Thresholds;

#[derive(Error, Debug)]
pub enum ThresholdsYamlError {
    #[error("failed to read thresholds yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse thresholds yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid thresholds: healthy limit {healthy} must be finite and not above warning limit {warning}")]
    InvalidThresholds { healthy: f64, warning: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdsRecord {
    healthy_max_percent: Option<f64>,
    warning_max_percent: Option<f64>,
}

pub fn load_thresholds_from_yaml_file(path: &str) -> Result<Thresholds, ThresholdsYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_thresholds_from_yaml_str(&contents)
}

/// Missing keys keep their default limits.
pub fn deserialize_thresholds_from_yaml_str(input: &str) -> Result<Thresholds, ThresholdsYamlError> {
    let record: ThresholdsRecord = serde_yaml::from_str(input)?;
    let defaults = Thresholds::default();
    let thresholds = Thresholds {
        healthy_max_percent: record
            .healthy_max_percent
            .unwrap_or(defaults.healthy_max_percent),
        warning_max_percent: record
            .warning_max_percent
            .unwrap_or(defaults.warning_max_percent),
    };

    let healthy = thresholds.healthy_max_percent;
    let warning = thresholds.warning_max_percent;
    if !healthy.is_finite() || !warning.is_finite() || healthy > warning {
        return Err(ThresholdsYamlError::InvalidThresholds { healthy, warning });
    }
    Ok(thresholds)
}
