use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;

use crate::domain::estimate::EstimateTask;
use crate::services::beta_pert_sampler::{BetaPertSampler, SampleError, ThreePointSampler};
use crate::services::simulation_types::{SimulationOutput, SimulationReport};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("task list is empty")]
    EmptyTasks,
    #[error("cannot sample task {id}: {source}")]
    InvalidTask { id: String, source: SampleError },
}

/// Monte Carlo estimate of the summed duration of all tasks.
/// A fixed `seed` makes the run reproducible.
pub fn simulate_total_duration(
    tasks: &[EstimateTask],
    iterations: usize,
    seed: Option<u64>,
) -> Result<SimulationOutput, SimulationError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sampler = BetaPertSampler::new(rng);
    simulate_total_duration_with_sampler(tasks, iterations, &mut sampler)
}

pub(crate) fn simulate_total_duration_with_sampler<S: ThreePointSampler>(
    tasks: &[EstimateTask],
    iterations: usize,
    sampler: &mut S,
) -> Result<SimulationOutput, SimulationError> {
    if iterations == 0 {
        return Err(SimulationError::InvalidIterations);
    }
    if tasks.is_empty() {
        return Err(SimulationError::EmptyTasks);
    }

    let mut results = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut total = 0.0;
        for task in tasks {
            total += sampler
                .sample(task.optimistic, task.likely, task.pessimistic)
                .map_err(|source| SimulationError::InvalidTask {
                    id: task.id.clone(),
                    source,
                })?;
        }
        results.push(total);
    }
    results.sort_by(|a, b| a.total_cmp(b));

    let mean = results.iter().sum::<f64>() / results.len() as f64;
    let report = SimulationReport {
        iterations,
        simulated_tasks: tasks.len(),
        mean,
        p0: percentile(&results, 0.0),
        p50: percentile(&results, 50.0),
        p85: percentile(&results, 85.0),
        p100: percentile(&results, 100.0),
    };
    debug!(iterations, p50 = report.p50, p85 = report.p85, "simulated total duration");

    Ok(SimulationOutput { report, results })
}

/// Nearest-rank percentile of an ascending slice; clamps outside `0..=100`.
pub fn percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return 0.0;
    };
    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        last
    } else {
        ((percentile / 100.0) * last as f64).round() as usize
    };
    sorted_values[index]
}
