use crate::domain::burn_rate::BurnRateInput;
use crate::domain::estimate::EstimateTask;
use crate::services::beta_pert_sampler::{SampleError, ThreePointSampler};

// A mock ThreePointSampler that always returns the most likely value
pub struct MockSampler;
impl ThreePointSampler for MockSampler {
    fn sample(&mut self, _optimistic: f64, likely: f64, _pessimistic: f64) -> Result<f64, SampleError> {
        Ok(likely)
    }
}

pub fn task(id: &str, optimistic: f64, likely: f64, pessimistic: f64) -> EstimateTask {
    EstimateTask::new(id, &format!("Task {id}"), optimistic, likely, pessimistic)
}

pub fn burn_input(
    total_budget: f64,
    spent_to_date: f64,
    days_elapsed: u32,
    total_days: u32,
) -> BurnRateInput {
    BurnRateInput {
        total_budget,
        spent_to_date,
        days_elapsed,
        total_days,
    }
}
