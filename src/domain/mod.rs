pub mod burn_rate;
pub mod estimate;
