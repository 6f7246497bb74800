pub mod beta_pert_sampler;
pub mod burn_chart;
pub mod burn_rate;
pub mod histogram;
pub mod pert;
pub mod pert_chart;
pub mod pert_export;
pub mod simulation;
pub mod simulation_types;
pub mod task_yaml;
pub mod thresholds_yaml;
