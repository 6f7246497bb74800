use crate::domain::estimate::{EstimateTask, PertTotals, TaskEstimate};

/// Weighted three-point estimate: `(o + 4m + p) / 6`.
pub fn pert_estimate(optimistic: f64, likely: f64, pessimistic: f64) -> f64 {
    (optimistic + 4.0 * likely + pessimistic) / 6.0
}

pub fn standard_deviation(optimistic: f64, pessimistic: f64) -> f64 {
    (pessimistic - optimistic) / 6.0
}

/// One estimate per task, in input order. Never fails: inverted or negative
/// inputs simply yield inverted or negative numbers.
pub fn compute_pert_estimates(tasks: &[EstimateTask]) -> Vec<TaskEstimate> {
    tasks
        .iter()
        .map(|task| TaskEstimate {
            id: task.id.clone(),
            pert_estimate: pert_estimate(task.optimistic, task.likely, task.pessimistic),
            standard_deviation: standard_deviation(task.optimistic, task.pessimistic),
        })
        .collect()
}

/// Sums the inputs and estimates for a table footer.
pub fn summarize(tasks: &[EstimateTask], estimates: &[TaskEstimate]) -> PertTotals {
    let mut totals = tasks.iter().fold(PertTotals::default(), |mut acc, task| {
        acc.optimistic += task.optimistic;
        acc.likely += task.likely;
        acc.pessimistic += task.pessimistic;
        acc
    });
    totals.pert_estimate = estimates.iter().map(|e| e.pert_estimate).sum();
    totals.standard_deviation = estimates
        .iter()
        .map(|e| e.standard_deviation * e.standard_deviation)
        .sum::<f64>()
        .sqrt();
    totals
}
