use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze budget burn rate and project spend at completion
    BurnRate {
        /// Total project budget
        #[arg(short = 'b', long)]
        total_budget: f64,
        /// Amount spent so far
        #[arg(short, long)]
        spent: f64,
        /// Days elapsed since project start
        #[arg(short = 'e', long)]
        days_elapsed: u32,
        /// Planned project duration in days
        #[arg(short, long)]
        total_days: u32,
        /// Optional YAML file with classification thresholds
        #[arg(short, long)]
        config: Option<String>,
        /// Optional output file for the full result (YAML, or JSON for *.json)
        #[arg(short, long)]
        output: Option<String>,
        /// Optional PNG file for the cumulative spend chart
        #[arg(long)]
        chart: Option<String>,
        /// Project start date (YYYY-MM-DD) used to label the chart and report
        #[arg(long)]
        start_date: Option<String>,
    },
    /// Compute PERT three-point estimates for a task list
    Pert {
        /// Task list YAML file
        #[arg(short, long)]
        input: String,
        /// Project name used for the export file name
        #[arg(short, long, default_value = "project")]
        project_name: String,
        /// Directory to write the CSV export into
        #[arg(short, long)]
        export_dir: Option<String>,
        /// Optional PNG file for the estimate bar chart
        #[arg(long)]
        chart: Option<String>,
        /// Run a Monte Carlo simulation of the total duration with this many iterations
        #[arg(short = 'n', long)]
        simulate: Option<usize>,
        /// Seed for a reproducible simulation
        #[arg(long, requires = "simulate")]
        seed: Option<u64>,
        /// Optional PNG file for the simulation histogram
        #[arg(long, requires = "simulate")]
        histogram: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
