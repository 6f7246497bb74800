use chrono::NaiveDate;
use tracing::info;

use crate::commands::CommandError;
use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_burn_rate_report;
use crate::commands::write_serialized;
use crate::domain::burn_rate::BurnRateInput;
use crate::services::burn_chart::write_burn_chart_png;
use crate::services::burn_rate::{compute_burn_rate, compute_burn_rate_with};
use crate::services::thresholds_yaml::load_thresholds_from_yaml_file;

pub fn burn_rate_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::BurnRate {
        total_budget,
        spent,
        days_elapsed,
        total_days,
        config,
        output,
        chart,
        start_date,
    } = cmd
    {
        let start_date = start_date
            .as_deref()
            .map(parse_start_date)
            .transpose()?;
        let input = BurnRateInput {
            total_budget,
            spent_to_date: spent,
            days_elapsed,
            total_days,
        };
        let result = match config.as_deref() {
            Some(path) => compute_burn_rate_with(&input, &load_thresholds_from_yaml_file(path)?)?,
            None => compute_burn_rate(&input)?,
        };
        info!(
            status = result.status.as_str(),
            variance_percent = result.variance_percent,
            "burn rate analyzed"
        );

        println!("{}", format_burn_rate_report(&input, &result, start_date));

        if let Some(path) = output {
            write_serialized(&path, &result)?;
            println!("Burn rate result written to {path}");
        }
        if let Some(path) = chart {
            write_burn_chart_png(&path, &result.chart_data, start_date)?;
            println!("Burn rate chart written to {path}");
        }
    }
    Ok(())
}

fn parse_start_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidStartDate(value.to_string()))
}
