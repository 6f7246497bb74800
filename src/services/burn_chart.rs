use chrono::{Days, NaiveDate};
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::burn_rate::ChartPoint;

#[derive(Error, Debug)]
pub enum BurnChartError {
    #[error("no chart points to plot")]
    EmptySeries,
    #[error("failed to render burn chart: {0}")]
    Render(String),
}

/// Draws planned, actual and projected cumulative spend as a PNG line chart.
/// With a `start_date` the x-axis shows calendar dates instead of day numbers.
pub fn write_burn_chart_png(
    output_path: &str,
    points: &[ChartPoint],
    start_date: Option<NaiveDate>,
) -> Result<(), BurnChartError> {
    let last = points.last().ok_or(BurnChartError::EmptySeries)?;
    let max_x = f64::from(last.day).max(1.0);

    let values = points.iter().flat_map(|p| {
        [Some(p.planned_cumulative), p.actual_cumulative, p.projected_cumulative]
            .into_iter()
            .flatten()
    });
    let (min_value, max_value) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let max_y = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let min_y = min_value * 1.1;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BurnChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Cumulative Spend", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..max_x, min_y..max_y)
        .map_err(|e| BurnChartError::Render(e.to_string()))?;

    let x_desc = if start_date.is_some() { "Date" } else { "Day" };
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc("Cumulative spend")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|day| format_day(*day, start_date))
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| BurnChartError::Render(e.to_string()))?;

    let planned_color = RGBColor(150, 150, 150);
    let actual_color = RGBColor(30, 122, 204);
    let projected_color = RGBColor(214, 96, 40);

    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .map(|p| (f64::from(p.day), p.planned_cumulative)),
            planned_color.stroke_width(2),
        ))
        .map_err(|e| BurnChartError::Render(e.to_string()))?
        .label("Planned")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], planned_color.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .filter_map(|p| p.actual_cumulative.map(|v| (f64::from(p.day), v))),
            actual_color.stroke_width(3),
        ))
        .map_err(|e| BurnChartError::Render(e.to_string()))?
        .label("Actual")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], actual_color.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .filter_map(|p| p.projected_cumulative.map(|v| (f64::from(p.day), v))),
            projected_color.stroke_width(2),
        ))
        .map_err(|e| BurnChartError::Render(e.to_string()))?
        .label("Projected")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], projected_color.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| BurnChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| BurnChartError::Render(e.to_string()))?;
    Ok(())
}

fn format_day(day: f64, start_date: Option<NaiveDate>) -> String {
    let offset = day.round().max(0.0) as u64;
    match start_date.and_then(|start| start.checked_add_days(Days::new(offset))) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => offset.to_string(),
    }
}
