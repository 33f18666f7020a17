pub mod csv_export;
pub mod json_export;
pub mod report;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use analysis::findings::generate_key_findings;
use analysis::ranking::rank_by_metric;
use analysis::{Metric, RouteTotals, ScenarioEvaluation};
use model::accommodation::AccommodationOptions;
use model::base_types::RouteId;
use model::json_serialisation::{load_travel_instance_from_json, InputError, TravelInstance};
use model::scenario::Scenario;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("cannot read input file '{path}': {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("no scenario matches '{0}'")]
    UnknownScenario(String),
    #[error("no accommodation option matches '{0}'")]
    UnknownAccommodation(String),
    #[error("cannot write output file '{path}': {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot write csv file '{path}': {source}")]
    WriteCsv { path: String, source: csv::Error },
    #[error("cannot write json file '{path}': {source}")]
    WriteJson {
        path: String,
        source: serde_json::Error,
    },
}

pub struct AnalysisOptions {
    /// Restrict the analysis to the scenario with this name or day budget.
    pub scenario: Option<String>,
    /// Restrict the cost figures to the accommodation option with this name.
    pub accommodation: Option<String>,
    /// Metric for the ranked recommendation.
    pub metric: Metric,
}

impl Default for AnalysisOptions {
    fn default() -> AnalysisOptions {
        AnalysisOptions {
            scenario: None,
            accommodation: None,
            metric: Metric::TotalEmissions,
        }
    }
}

/// One scenario with its per-route evaluations and the ranked recommendation.
pub struct ScenarioBlock {
    pub scenario: Scenario,
    pub evaluations: Vec<ScenarioEvaluation>,
    pub ranking: Vec<RouteId>,
}

pub struct AnalysisResult {
    pub instance: TravelInstance,
    /// Route totals in route declaration order.
    pub totals: Vec<RouteTotals>,
    pub consistency_warnings: Vec<String>,
    pub blocks: Vec<ScenarioBlock>,
    pub findings: Vec<String>,
    pub metric: Metric,
    /// Name of the accommodation option used for cost-based figures in the
    /// ranking (the cheapest remaining option).
    pub ranking_accommodation: String,
}

pub fn run(input_file: &Path, options: &AnalysisOptions) -> Result<AnalysisResult, AppError> {
    log::info!("loading travel instance from {}", input_file.display());
    let mut instance = load_instance(input_file)?;

    if let Some(filter) = &options.scenario {
        let selected: Vec<Scenario> = instance
            .scenarios
            .iter()
            .filter(|scenario| matches_scenario(scenario, filter))
            .cloned()
            .collect();
        if selected.is_empty() {
            return Err(AppError::UnknownScenario(filter.clone()));
        }
        instance.scenarios = selected;
    }

    if let Some(filter) = &options.accommodation {
        match instance.accommodation.get_by_name(filter) {
            Some(option) => {
                instance.accommodation = AccommodationOptions::new(vec![option.clone()])
            }
            None => return Err(AppError::UnknownAccommodation(filter.clone())),
        }
    }

    log::info!(
        "evaluating {} scenarios over {} routes",
        instance.scenarios.len(),
        instance.routes.len()
    );

    let totals: Vec<RouteTotals> = instance.routes.iter().map(RouteTotals::compute).collect();

    let consistency_warnings: Vec<String> = instance
        .routes
        .iter()
        .zip(totals.iter())
        .filter_map(|(route, route_totals)| {
            route_totals
                .consistency_gap(route, instance.config.emissions_tolerance_kg)
                .map(|gap| {
                    format!(
                        "route '{}': published round-trip emissions differ from the computed {} by {:+.1} kg; keeping the computed figure",
                        route.name(),
                        route_totals.round_trip_emissions(),
                        gap,
                    )
                })
        })
        .collect();
    for warning in &consistency_warnings {
        log::warn!("{}", warning);
    }

    // the accommodation list is validated non-empty at load time
    let ranking_accommodation = instance
        .accommodation
        .cheapest()
        .expect("accommodation options are never empty")
        .clone();

    let blocks: Vec<ScenarioBlock> = instance
        .scenarios
        .iter()
        .map(|scenario| {
            let evaluations: Vec<ScenarioEvaluation> = instance
                .routes
                .iter()
                .map(|route| {
                    ScenarioEvaluation::evaluate(
                        scenario,
                        route.id(),
                        &totals[route.id().0 as usize],
                    )
                })
                .collect();
            let ranking = rank_by_metric(&evaluations, options.metric, &ranking_accommodation);
            ScenarioBlock {
                scenario: scenario.clone(),
                evaluations,
                ranking,
            }
        })
        .collect();

    let evaluations_by_scenario: Vec<(&Scenario, &[ScenarioEvaluation])> = blocks
        .iter()
        .map(|block| (&block.scenario, block.evaluations.as_slice()))
        .collect();
    let findings = generate_key_findings(
        &instance.routes,
        &instance.accommodation,
        &evaluations_by_scenario,
        &totals,
    );

    Ok(AnalysisResult {
        instance,
        totals,
        consistency_warnings,
        blocks,
        findings,
        metric: options.metric,
        ranking_accommodation: ranking_accommodation.name().to_string(),
    })
}

fn load_instance(input_file: &Path) -> Result<TravelInstance, AppError> {
    let mut file = File::open(input_file).map_err(|source| AppError::ReadInput {
        path: input_file.display().to_string(),
        source,
    })?;
    let mut data = String::new();
    file.read_to_string(&mut data)
        .map_err(|source| AppError::ReadInput {
            path: input_file.display().to_string(),
            source,
        })?;
    let input_data: serde_json::Value = serde_json::from_str(&data).map_err(InputError::from)?;
    Ok(load_travel_instance_from_json(input_data)?)
}

/// A scenario can be selected by its name ("1-week") or its budget ("7").
fn matches_scenario(scenario: &Scenario, filter: &str) -> bool {
    scenario.name().eq_ignore_ascii_case(filter)
        || scenario.budget_in_days().to_string() == filter
}
