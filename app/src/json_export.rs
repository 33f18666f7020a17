use serde_json::{json, Value};

use crate::AnalysisResult;

/// The full analysis as one JSON document.
pub fn results_to_json(result: &AnalysisResult) -> Value {
    let routes: Vec<Value> = result
        .instance
        .routes
        .iter()
        .zip(result.totals.iter())
        .map(|(route, totals)| {
            json!({
                "name": route.name(),
                "totalDistanceInKm": totals.total_distance().in_km(),
                "oneWayDurationInMinutes": totals.one_way_duration().in_min(),
                "oneWayEmissionsInKg": totals.one_way_emissions().in_kg(),
                "roundTripEmissionsInKg": totals.round_trip_emissions().in_kg(),
                "roundTripCostInEuro": totals.round_trip_cost(),
                "travelDaysRoundTrip": totals.travel_days_round_trip(),
            })
        })
        .collect();

    let scenarios: Vec<Value> = result
        .blocks
        .iter()
        .map(|block| {
            let evaluations: Vec<Value> = block
                .evaluations
                .iter()
                .map(|evaluation| {
                    let costs: serde_json::Map<String, Value> = result
                        .instance
                        .accommodation
                        .iter()
                        .map(|accommodation| {
                            (
                                accommodation.name().to_string(),
                                json!(evaluation.cost_with(accommodation)),
                            )
                        })
                        .collect();
                    json!({
                        "route": route_name(result, evaluation.route()),
                        "feasible": evaluation.is_feasible(),
                        "travelDaysRoundTrip": evaluation.travel_days_round_trip(),
                        "daysAtDestination": evaluation.days_at_destination(),
                        "roundTripEmissionsInKg": evaluation.round_trip_emissions().in_kg(),
                        "emissionsPerDayInKg": evaluation.emissions_per_day(),
                        "totalCostInEuro": costs,
                    })
                })
                .collect();
            let ranking: Vec<&str> = block
                .ranking
                .iter()
                .map(|route_id| route_name(result, *route_id))
                .collect();
            json!({
                "name": block.scenario.name(),
                "budgetInDays": block.scenario.budget_in_days(),
                "evaluations": evaluations,
                "ranking": ranking,
            })
        })
        .collect();

    json!({
        "metric": result.metric.to_string(),
        "rankingAccommodation": result.ranking_accommodation,
        "routes": routes,
        "scenarios": scenarios,
        "keyFindings": result.findings,
        "consistencyWarnings": result.consistency_warnings,
    })
}

fn route_name(result: &AnalysisResult, route_id: model::base_types::RouteId) -> &str {
    result
        .instance
        .routes
        .get(route_id)
        .map(|route| route.name())
        .unwrap_or("?")
}
