use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use model::accommodation::Accommodation;
use model::base_types::RouteId;

use crate::scenario_evaluation::ScenarioEvaluation;

/// The metric by which routes are ranked for the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalEmissions,
    EmissionsPerDay,
    TotalCost,
}

impl Metric {
    /// The value of one evaluation under this metric. `None` when the metric
    /// is undefined (per-day figures with zero days at the destination).
    pub fn value_of(
        &self,
        evaluation: &ScenarioEvaluation,
        accommodation: &Accommodation,
    ) -> Option<f64> {
        match self {
            Metric::TotalEmissions => Some(evaluation.round_trip_emissions().in_kg()),
            Metric::EmissionsPerDay => evaluation.emissions_per_day(),
            Metric::TotalCost => evaluation.cost_with(accommodation).map(|cost| cost as f64),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Metric::TotalEmissions => write!(f, "total emissions"),
            Metric::EmissionsPerDay => write!(f, "emissions per day"),
            Metric::TotalCost => write!(f, "total cost"),
        }
    }
}

/// Ranks the feasible evaluations ascending by the given metric.
///
/// The sort is stable, so ties keep the route declaration order of the input
/// slice. Evaluations with an undefined metric value sort last.
pub fn rank_by_metric(
    evaluations: &[ScenarioEvaluation],
    metric: Metric,
    accommodation: &Accommodation,
) -> Vec<RouteId> {
    evaluations
        .iter()
        .filter(|evaluation| evaluation.is_feasible())
        .sorted_by(|a, b| {
            let a_value = metric.value_of(a, accommodation).unwrap_or(f64::INFINITY);
            let b_value = metric.value_of(b, accommodation).unwrap_or(f64::INFINITY);
            a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal)
        })
        .map(|evaluation| evaluation.route())
        .collect()
}
