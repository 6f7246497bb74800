use plotters::prelude::*;
use thiserror::Error;

use crate::domain::estimate::{EstimateTask, TaskEstimate};

#[derive(Error, Debug)]
pub enum PertChartError {
    #[error("no task estimates to plot")]
    EmptyEstimates,
    #[error("failed to render estimate chart: {0}")]
    Render(String),
}

/// One bar per task at its PERT estimate, with a one-standard-deviation whisker.
pub fn write_pert_chart_png(
    output_path: &str,
    tasks: &[EstimateTask],
    estimates: &[TaskEstimate],
) -> Result<(), PertChartError> {
    if estimates.is_empty() {
        return Err(PertChartError::EmptyEstimates);
    }

    let (min_value, max_value) = estimates.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), e| {
        let spread = e.standard_deviation.abs();
        (
            lo.min(e.pert_estimate - spread),
            hi.max(e.pert_estimate + spread),
        )
    });
    let max_y = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let min_y = min_value * 1.1;
    let max_x = estimates.len() as f64;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PertChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("PERT Estimates", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0.0..max_x, min_y..max_y)
        .map_err(|e| PertChartError::Render(e.to_string()))?;

    let label_count = estimates.len().min(10);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Task")
        .y_desc("Duration")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0.0 {
                return String::new();
            }
            tasks
                .get(index.floor() as usize)
                .map(|task| task.name.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| PertChartError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(estimates.iter().enumerate().map(|(idx, estimate)| {
            let left = idx as f64 + 0.15;
            Rectangle::new(
                [(left, 0.0), (left + 0.7, estimate.pert_estimate)],
                bar_style,
            )
        }))
        .map_err(|e| PertChartError::Render(e.to_string()))?;

    chart
        .draw_series(estimates.iter().enumerate().map(|(idx, estimate)| {
            let center = idx as f64 + 0.5;
            let spread = estimate.standard_deviation.abs();
            PathElement::new(
                vec![
                    (center, estimate.pert_estimate - spread),
                    (center, estimate.pert_estimate + spread),
                ],
                BLACK.stroke_width(2),
            )
        }))
        .map_err(|e| PertChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| PertChartError::Render(e.to_string()))?;
    Ok(())
}
