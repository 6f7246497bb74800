/// Percentiles of the simulated total duration, in the same unit as the task estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub iterations: usize,
    pub simulated_tasks: usize,
    pub mean: f64,
    pub p0: f64,
    pub p50: f64,
    pub p85: f64,
    pub p100: f64,
}

#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub report: SimulationReport,
    /// Sorted ascending.
    pub results: Vec<f64>,
}
