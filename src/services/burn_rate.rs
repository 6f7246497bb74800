use thiserror::Error;
use tracing::debug;

use crate::domain::burn_rate::{BurnRateInput, BurnRateResult, BurnStatus, ChartPoint, Thresholds};

/// Upper bound on the number of chart intervals; the series has at most one more point.
const CHART_INTERVALS: u32 = 20;

#[derive(Error, Debug, PartialEq)]
pub enum BurnRateError {
    #[error("invalid burn rate input: {0}")]
    InvalidInput(String),
}

pub fn compute_burn_rate(input: &BurnRateInput) -> Result<BurnRateResult, BurnRateError> {
    compute_burn_rate_with(input, &Thresholds::default())
}

/// Projects spend at completion from the current pace and classifies the
/// over-spend against `thresholds`.
///
/// Under-spend is never flagged: any negative variance is healthy.
///
/// # Errors
///
/// Returns [`BurnRateError::InvalidInput`] when an input is non-finite, would
/// put a zero in a denominator (`days_elapsed`, `total_days`, `total_budget`),
/// or is large enough that a derived figure overflows to a non-finite value.
pub fn compute_burn_rate_with(
    input: &BurnRateInput,
    thresholds: &Thresholds,
) -> Result<BurnRateResult, BurnRateError> {
    validate_input(input)?;

    let days_elapsed = f64::from(input.days_elapsed);
    let total_days = f64::from(input.total_days);

    let current_burn_rate = input.spent_to_date / days_elapsed;
    let planned_burn_rate = input.total_budget / total_days;
    let variance = current_burn_rate - planned_burn_rate;
    let variance_percent = variance / planned_burn_rate * 100.0;

    let days_remaining = i64::from(input.total_days) - i64::from(input.days_elapsed);
    let projected_final_spend = input.spent_to_date + current_burn_rate * days_remaining as f64;
    let projected_overrun = projected_final_spend - input.total_budget;

    ensure_finite("current burn rate", current_burn_rate)?;
    ensure_finite("planned burn rate", planned_burn_rate)?;
    ensure_finite("variance", variance)?;
    ensure_finite("variance percent", variance_percent)?;
    ensure_finite("projected final spend", projected_final_spend)?;
    ensure_finite("projected overrun", projected_overrun)?;

    let chart_data = chart_series(input, current_burn_rate, planned_burn_rate);
    for point in &chart_data {
        ensure_finite("planned cumulative spend", point.planned_cumulative)?;
        if let Some(value) = point.actual_cumulative {
            ensure_finite("actual cumulative spend", value)?;
        }
        if let Some(value) = point.projected_cumulative {
            ensure_finite("projected cumulative spend", value)?;
        }
    }

    let (status, recommendation) = classify(variance_percent, thresholds);
    debug!(
        current_burn_rate,
        planned_burn_rate,
        variance_percent,
        status = status.as_str(),
        "computed burn rate"
    );

    Ok(BurnRateResult {
        current_burn_rate,
        planned_burn_rate,
        variance,
        variance_percent,
        projected_final_spend,
        projected_overrun,
        days_remaining,
        status,
        recommendation,
        chart_data,
    })
}

fn validate_input(input: &BurnRateInput) -> Result<(), BurnRateError> {
    if !input.total_budget.is_finite() {
        return Err(BurnRateError::InvalidInput(format!(
            "total budget must be finite, got {}",
            input.total_budget
        )));
    }
    if !input.spent_to_date.is_finite() {
        return Err(BurnRateError::InvalidInput(format!(
            "spent to date must be finite, got {}",
            input.spent_to_date
        )));
    }
    if input.total_budget == 0.0 {
        return Err(BurnRateError::InvalidInput(
            "total budget must not be zero".to_string(),
        ));
    }
    if input.days_elapsed == 0 {
        return Err(BurnRateError::InvalidInput(
            "days elapsed must be greater than zero".to_string(),
        ));
    }
    if input.total_days == 0 {
        return Err(BurnRateError::InvalidInput(
            "total days must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn ensure_finite(name: &str, value: f64) -> Result<(), BurnRateError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BurnRateError::InvalidInput(format!(
            "{name} overflows to {value}"
        )))
    }
}

/// First matching limit wins; both limits are inclusive.
pub fn classify(variance_percent: f64, thresholds: &Thresholds) -> (BurnStatus, String) {
    if variance_percent <= thresholds.healthy_max_percent {
        (
            BurnStatus::Healthy,
            "Spending is on track with the planned budget. Continue monitoring the burn rate."
                .to_string(),
        )
    } else if variance_percent <= thresholds.warning_max_percent {
        (
            BurnStatus::Warning,
            format!(
                "Burn rate is {variance_percent:.1}% above plan. Review upcoming expenditures and adjust the forecast."
            ),
        )
    } else {
        (
            BurnStatus::Critical,
            format!(
                "Critical: burn rate is {variance_percent:.1}% above plan. Immediate corrective action is required to avoid a budget overrun."
            ),
        )
    }
}

fn chart_series(input: &BurnRateInput, current_burn_rate: f64, planned_burn_rate: f64) -> Vec<ChartPoint> {
    let step = input.total_days.div_ceil(CHART_INTERVALS).max(1);
    (0..=input.total_days)
        .step_by(step as usize)
        .map(|day| {
            let elapsed = day <= input.days_elapsed;
            let day_f = f64::from(day);
            ChartPoint {
                day,
                planned_cumulative: planned_burn_rate * day_f,
                actual_cumulative: elapsed.then(|| current_burn_rate * day_f),
                projected_cumulative: (!elapsed).then(|| {
                    input.spent_to_date
                        + current_burn_rate * (day_f - f64::from(input.days_elapsed))
                }),
            }
        })
        .collect()
}
