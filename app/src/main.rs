use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use analysis::Metric;
use app::{csv_export, json_export, report, AnalysisOptions, AppError};

#[derive(Parser, Debug)]
#[command(
    name = "eco_travel",
    about = "Compares travel route options by carbon footprint, cost, and time"
)]
struct CliArgs {
    /// JSON file describing emission factors, routes, accommodation, and scenarios
    input_file: PathBuf,
    /// Only evaluate the scenario with this name or day budget (e.g. "1-week" or "7")
    #[arg(long)]
    scenario: Option<String>,
    /// Only use the accommodation option with this name (e.g. "hostel")
    #[arg(long)]
    accommodation: Option<String>,
    /// Metric for the ranked recommendation
    #[arg(long, value_enum, default_value = "total-emissions")]
    metric: MetricArg,
    /// Write the scenario table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the full results to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum MetricArg {
    TotalEmissions,
    EmissionsPerDay,
    TotalCost,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Metric {
        match arg {
            MetricArg::TotalEmissions => Metric::TotalEmissions,
            MetricArg::EmissionsPerDay => Metric::EmissionsPerDay,
            MetricArg::TotalCost => Metric::TotalCost,
        }
    }
}

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(e) = run_analysis(args) {
        log::error!("{e}");
        std::process::exit(1)
    }
}

fn run_analysis(args: CliArgs) -> Result<(), AppError> {
    let options = AnalysisOptions {
        scenario: args.scenario,
        accommodation: args.accommodation,
        metric: args.metric.into(),
    };

    let result = app::run(&args.input_file, &options)?;

    print!("{}", report::render(&result));

    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|source| AppError::WriteOutput {
            path: path.display().to_string(),
            source,
        })?;
        csv_export::write_scenario_table(&result, file).map_err(|source| AppError::WriteCsv {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("scenario table written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path).map_err(|source| AppError::WriteOutput {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::to_writer_pretty(file, &json_export::results_to_json(&result)).map_err(
            |source| AppError::WriteJson {
                path: path.display().to_string(),
                source,
            },
        )?;
        log::info!("results written to {}", path.display());
    }

    Ok(())
}
