use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnRateInput {
    pub total_budget: f64,
    pub spent_to_date: f64,
    pub days_elapsed: u32,
    pub total_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnStatus {
    Healthy,
    Warning,
    Critical,
}

impl BurnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurnStatus::Healthy => "healthy",
            BurnStatus::Warning => "warning",
            BurnStatus::Critical => "critical",
        }
    }
}

/// One sampled day of the cumulative spend chart.
///
/// `actual_cumulative` is present up to and including the elapsed day,
/// `projected_cumulative` only after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub day: u32,
    pub planned_cumulative: f64,
    pub actual_cumulative: Option<f64>,
    pub projected_cumulative: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnRateResult {
    pub current_burn_rate: f64,
    pub planned_burn_rate: f64,
    pub variance: f64,
    pub variance_percent: f64,
    pub projected_final_spend: f64,
    pub projected_overrun: f64,
    pub days_remaining: i64,
    pub status: BurnStatus,
    pub recommendation: String,
    pub chart_data: Vec<ChartPoint>,
}

/// Upper variance-percent limits (inclusive) for each status.
/// Anything above `warning_max_percent` is critical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub healthy_max_percent: f64,
    pub warning_max_percent: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            healthy_max_percent: 5.0,
            warning_max_percent: 15.0,
        }
    }
}
