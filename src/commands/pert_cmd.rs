use std::path::Path;

use tracing::{debug, info};

use crate::commands::CommandError;
use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_pert_report, format_simulation_report};
use crate::services::histogram::write_histogram_png;
use crate::services::pert::{compute_pert_estimates, summarize};
use crate::services::pert_chart::write_pert_chart_png;
use crate::services::pert_export::write_pert_csv;
use crate::services::simulation::simulate_total_duration;
use crate::services::task_yaml::load_tasks_from_yaml_file;

pub fn pert_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Pert {
        input,
        project_name,
        export_dir,
        chart,
        simulate,
        seed,
        histogram,
    } = cmd
    {
        let tasks = load_tasks_from_yaml_file(&input)?;
        debug!(tasks = tasks.len(), input = %input, "loaded tasks");

        let estimates = compute_pert_estimates(&tasks);
        let totals = summarize(&tasks, &estimates);
        info!(
            tasks = tasks.len(),
            total_pert = totals.pert_estimate,
            "pert estimates computed"
        );
        println!("{}", format_pert_report(&tasks, &estimates, &totals));

        if let Some(dir) = export_dir {
            let path = write_pert_csv(Path::new(&dir), &project_name, &tasks, &estimates)?;
            println!("Estimate export written to {}", path.display());
        }

        if let Some(path) = chart {
            write_pert_chart_png(&path, &tasks, &estimates)?;
            println!("Estimate chart written to {path}");
        }

        if let Some(iterations) = simulate {
            let simulation = simulate_total_duration(&tasks, iterations, seed)?;
            info!(
                iterations,
                p50 = simulation.report.p50,
                p85 = simulation.report.p85,
                "simulation finished"
            );
            println!();
            println!("{}", format_simulation_report(&simulation.report));
            if let Some(path) = histogram {
                write_histogram_png(&path, &simulation.results)?;
                println!("Simulation histogram written to {path}");
            }
        }
    }
    Ok(())
}
