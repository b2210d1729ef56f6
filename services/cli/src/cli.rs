use crate::render::{render_json, render_text, render_thresholds};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shift_audit::config::{validate_thresholds, AppConfig};
use shift_audit::error::AppError;
use shift_audit::telemetry;
use shift_audit::workflows::timecard::{ShiftThresholds, TimecardImporter};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "shift-audit",
    about = "Flag scheduling anomalies in a timecard CSV export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a timecard export and print the flagged employees
    Analyze(AnalyzeArgs),
    /// Print the thresholds that would be applied
    Thresholds(ThresholdArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Timecard CSV with Employee Name, Position ID, Time and Time Out columns
    csv: PathBuf,
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(flatten)]
    thresholds: ThresholdArgs,
}

#[derive(Args, Debug)]
struct ThresholdArgs {
    /// Override the consecutive-days threshold (days)
    #[arg(long)]
    consecutive_days: Option<f64>,
    /// Override the lower bound of the gap window (hours)
    #[arg(long)]
    min_gap_hours: Option<f64>,
    /// Override the upper bound of the gap window (hours)
    #[arg(long)]
    max_gap_hours: Option<f64>,
    /// Override the maximum single shift length (hours)
    #[arg(long)]
    max_shift_hours: Option<f64>,
}

impl ThresholdArgs {
    fn apply(&self, thresholds: &mut ShiftThresholds) {
        if let Some(days) = self.consecutive_days {
            thresholds.consecutive_days = days;
        }
        if let Some(hours) = self.min_gap_hours {
            thresholds.min_gap_hours = hours;
        }
        if let Some(hours) = self.max_gap_hours {
            thresholds.max_gap_hours = hours;
        }
        if let Some(hours) = self.max_shift_hours {
            thresholds.max_shift_hours = hours;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    match cli.command {
        Command::Analyze(args) => {
            args.thresholds.apply(&mut config.thresholds);
            validate_thresholds(&config.thresholds)?;
            telemetry::init(&config.telemetry)?;
            run_analysis(&config, args.csv, args.format)
        }
        Command::Thresholds(args) => {
            args.apply(&mut config.thresholds);
            validate_thresholds(&config.thresholds)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(render_thresholds(&config.thresholds).as_bytes())?;
            Ok(())
        }
    }
}

fn run_analysis(config: &AppConfig, csv: PathBuf, format: OutputFormat) -> Result<(), AppError> {
    info!(?config.environment, path = %csv.display(), "analyzing timecard export");
    let result = TimecardImporter::from_path(&csv, config.thresholds)?;

    let rendered = match format {
        OutputFormat::Text => render_text(&result, &config.thresholds),
        OutputFormat::Json => render_json(&result)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    Ok(())
}
