use chrono::{Days, NaiveDate};

use crate::domain::burn_rate::{BurnRateInput, BurnRateResult};
use crate::domain::estimate::{EstimateTask, PertTotals, TaskEstimate};
use crate::services::simulation_types::SimulationReport;

pub fn format_burn_rate_report(
    input: &BurnRateInput,
    result: &BurnRateResult,
    start_date: Option<NaiveDate>,
) -> String {
    let mut lines = Vec::new();
    lines.push("Burn Rate Report".to_string());
    lines.push(format!("Total budget: {:.2}", input.total_budget));
    lines.push(format!("Spent to date: {:.2}", input.spent_to_date));
    lines.push(format!(
        "Days: {} of {} ({} remaining)",
        input.days_elapsed, input.total_days, result.days_remaining
    ));
    if let Some(start) = start_date {
        lines.push(format!("Start date: {}", start.format("%Y-%m-%d")));
        lines.push(format!(
            "Planned end date: {}",
            offset_date(start, input.total_days)
        ));
        lines.push(format!(
            "Days remaining: {} (as of {})",
            result.days_remaining,
            offset_date(start, input.days_elapsed)
        ));
    }
    lines.push(String::new());
    lines.push(format!("Current burn rate: {:.2} / day", result.current_burn_rate));
    lines.push(format!("Planned burn rate: {:.2} / day", result.planned_burn_rate));
    lines.push(format!(
        "Variance: {:.2} / day ({:.1}%)",
        result.variance, result.variance_percent
    ));
    lines.push(format!("Projected final spend: {:.2}", result.projected_final_spend));
    lines.push(format!("Projected overrun: {:.2}", result.projected_overrun));
    lines.push(String::new());
    lines.push(format!("Status: {}", result.status.as_str().to_uppercase()));
    lines.push(format!("Recommendation: {}", result.recommendation));

    lines.join("\n")
}

pub fn format_pert_report(
    tasks: &[EstimateTask],
    estimates: &[TaskEstimate],
    totals: &PertTotals,
) -> String {
    let mut lines = Vec::new();
    lines.push("PERT Estimates".to_string());
    lines.push(format!("Tasks: {}", tasks.len()));
    lines.push(String::new());
    lines.push("Task | Optimistic | Most likely | Pessimistic | PERT | Std dev".to_string());
    lines.push("-----|------------|-------------|-------------|------|--------".to_string());
    for (task, estimate) in tasks.iter().zip(estimates) {
        lines.push(format!(
            "{} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2}",
            task.name,
            task.optimistic,
            task.likely,
            task.pessimistic,
            estimate.pert_estimate,
            estimate.standard_deviation
        ));
    }
    lines.push(format!(
        "Total | {:.2} | {:.2} | {:.2} | {:.2} | {:.2}",
        totals.optimistic,
        totals.likely,
        totals.pessimistic,
        totals.pert_estimate,
        totals.standard_deviation
    ));

    lines.join("\n")
}

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Simulation Report".to_string());
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Simulated tasks: {}", report.simulated_tasks));
    lines.push(format!("Mean: {:.2}", report.mean));
    lines.push(String::new());
    lines.push("Percentile | Total duration".to_string());
    lines.push("-----------|---------------".to_string());
    lines.push(format!("P0 | {:.2}", report.p0));
    lines.push(format!("P50 | {:.2}", report.p50));
    lines.push(format!("P85 | {:.2}", report.p85));
    lines.push(format!("P100 | {:.2}", report.p100));

    lines.join("\n")
}

fn offset_date(start: NaiveDate, days: u32) -> String {
    start
        .checked_add_days(Days::new(u64::from(days)))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "n/a".to_string())
}
