/// A task with a three-point duration estimate, as entered by the user.
///
/// `optimistic <= likely <= pessimistic` is the convention, not a rule:
/// inverted values still produce well-defined (if odd) estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateTask {
    pub id: String,
    pub name: String,
    pub optimistic: f64,
    pub likely: f64,
    pub pessimistic: f64,
}

impl EstimateTask {
    pub fn new(id: &str, name: &str, optimistic: f64, likely: f64, pessimistic: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            optimistic,
            likely,
            pessimistic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskEstimate {
    pub id: String,
    pub pert_estimate: f64,
    pub standard_deviation: f64,
}

/// Aggregates over a task list and its estimates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PertTotals {
    pub optimistic: f64,
    pub likely: f64,
    pub pessimistic: f64,
    pub pert_estimate: f64,
    /// Square root of the summed variances, assuming independent tasks.
    pub standard_deviation: f64,
}
