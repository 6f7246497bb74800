use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Groups simulated totals into `sqrt(n)`-wide buckets and draws them as bars.
/// Writes nothing for an empty slice.
pub fn write_histogram_png(output_path: &str, results: &[f64]) -> Result<(), HistogramError> {
    if results.is_empty() {
        return Ok(());
    }

    let min_value = results.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;
    let bin_width = if range < f64::EPSILON {
        1.0
    } else {
        range / (results.len() as f64).sqrt()
    };

    let counts = bucket_counts(results, bin_width);
    let max_count = counts.values().copied().max().unwrap_or(1);
    let min_bucket = counts.keys().next().copied().unwrap_or(0) - 1;
    let max_bucket = counts.keys().next_back().copied().unwrap_or(0) + 1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Simulated Total Duration", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_bucket..max_bucket, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Total duration")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{:.2}", f64::from(*bucket) * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(
            counts
                .iter()
                .map(|(bucket, count)| Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], bar_style)),
        )
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

fn bucket_counts(results: &[f64], bin_width: f64) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for value in results {
        let bucket = (value / bin_width).round() as i32;
        *counts.entry(bucket).or_insert(0usize) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_counts_groups_by_rounded_bin() {
        let counts = bucket_counts(&[1.0, 1.4, 2.0, 4.0], 1.0);
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&4), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn write_histogram_png_skips_empty_results() {
        let output_file = assert_fs::NamedTempFile::new("empty.png").unwrap();
        write_histogram_png(output_file.path().to_str().unwrap(), &[]).unwrap();
        assert!(!output_file.path().exists());
    }

    #[test]
    fn write_histogram_png_writes_file_for_constant_results() {
        let output_file = assert_fs::NamedTempFile::new("constant.png").unwrap();
        write_histogram_png(output_file.path().to_str().unwrap(), &[20.0, 20.0, 20.0]).unwrap();
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }
}
