use itertools::Itertools;

use model::accommodation::AccommodationOptions;
use model::base_types::RouteId;
use model::routes::Routes;
use model::scenario::Scenario;

use crate::route_metrics::RouteTotals;
use crate::scenario_evaluation::ScenarioEvaluation;

/// Summarises the analysis as an ordered list of human-readable findings,
/// mirroring the summary slide of the report.
pub fn generate_key_findings(
    routes: &Routes,
    accommodation: &AccommodationOptions,
    evaluations_by_scenario: &[(&Scenario, &[ScenarioEvaluation])],
    totals: &[RouteTotals],
) -> Vec<String> {
    let mut findings = Vec::new();

    let any_feasible = evaluations_by_scenario
        .iter()
        .any(|(_, evaluations)| evaluations.iter().any(|e| e.is_feasible()));
    if !any_feasible {
        findings.push(String::from(
            "No feasible travel options found for the given scenarios.",
        ));
        return findings;
    }

    add_carbon_comparison(&mut findings, routes, totals);
    add_feasibility_overview(&mut findings, routes, evaluations_by_scenario);
    add_carbon_efficiency(&mut findings, routes, evaluations_by_scenario);
    add_cheapest_options(&mut findings, routes, accommodation, evaluations_by_scenario);
    add_recommendations(&mut findings, routes, evaluations_by_scenario);

    findings
}

fn add_carbon_comparison(findings: &mut Vec<String>, routes: &Routes, totals: &[RouteTotals]) {
    let best = routes
        .iter()
        .min_by_key(|route| total_of(totals, route.id()).round_trip_emissions());
    let worst = routes
        .iter()
        .max_by_key(|route| total_of(totals, route.id()).round_trip_emissions());
    let (best, worst) = match (best, worst) {
        (Some(best), Some(worst)) => (best, worst),
        _ => return,
    };

    let best_emissions = total_of(totals, best.id()).round_trip_emissions();
    findings.push(format!(
        "1. Carbon footprint: '{}' has the lowest round-trip emissions ({}).",
        best.name(),
        best_emissions,
    ));

    let worst_emissions = total_of(totals, worst.id()).round_trip_emissions();
    if worst_emissions > best_emissions && worst_emissions.in_gram() > 0 {
        let reduction = (1.0 - best_emissions.in_kg() / worst_emissions.in_kg()) * 100.0;
        findings.push(format!(
            "   - This is {:.1}% less than '{}' ({}).",
            reduction,
            worst.name(),
            worst_emissions,
        ));
    }
}

fn add_feasibility_overview(
    findings: &mut Vec<String>,
    routes: &Routes,
    evaluations_by_scenario: &[(&Scenario, &[ScenarioEvaluation])],
) {
    findings.push(String::from("2. Feasibility:"));
    for (scenario, evaluations) in evaluations_by_scenario {
        let feasible = evaluations
            .iter()
            .filter(|e| e.is_feasible())
            .map(|e| format!("'{}'", route_name(routes, e.route())))
            .join(", ");
        if feasible.is_empty() {
            findings.push(format!("   - {}: no feasible routes.", scenario.name()));
        } else {
            findings.push(format!("   - {}: {}.", scenario.name(), feasible));
        }
    }
}

fn add_carbon_efficiency(
    findings: &mut Vec<String>,
    routes: &Routes,
    evaluations_by_scenario: &[(&Scenario, &[ScenarioEvaluation])],
) {
    let longest = evaluations_by_scenario
        .iter()
        .max_by_key(|(scenario, _)| scenario.budget_in_days());
    let (scenario, evaluations) = match longest {
        Some((scenario, evaluations)) => (scenario, evaluations),
        None => return,
    };

    let best = evaluations
        .iter()
        .filter_map(|e| e.emissions_per_day().map(|per_day| (e, per_day)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b));
    match best {
        Some((evaluation, per_day)) => findings.push(format!(
            "3. Carbon efficiency ({}): '{}' has the lowest emissions per day at the destination ({:.2} kg CO2e/day).",
            scenario.name(),
            route_name(routes, evaluation.route()),
            per_day,
        )),
        None => findings.push(format!(
            "3. Carbon efficiency ({}): no feasible routes to compare.",
            scenario.name(),
        )),
    }
}

fn add_cheapest_options(
    findings: &mut Vec<String>,
    routes: &Routes,
    accommodation: &AccommodationOptions,
    evaluations_by_scenario: &[(&Scenario, &[ScenarioEvaluation])],
) {
    let cheapest_accommodation = match accommodation.cheapest() {
        Some(option) => option,
        None => return,
    };
    findings.push(format!(
        "4. Cheapest options ({} accommodation):",
        cheapest_accommodation.name(),
    ));
    for (scenario, evaluations) in evaluations_by_scenario {
        let cheapest = evaluations
            .iter()
            .filter_map(|e| e.cost_with(cheapest_accommodation).map(|cost| (e, cost)))
            .min_by_key(|(_, cost)| *cost);
        match cheapest {
            Some((evaluation, cost)) => findings.push(format!(
                "   - {}: '{}' at {} EUR.",
                scenario.name(),
                route_name(routes, evaluation.route()),
                cost,
            )),
            None => findings.push(format!(
                "   - {}: no feasible options.",
                scenario.name(),
            )),
        }
    }
}

fn add_recommendations(
    findings: &mut Vec<String>,
    routes: &Routes,
    evaluations_by_scenario: &[(&Scenario, &[ScenarioEvaluation])],
) {
    findings.push(String::from(
        "5. Recommendation (lowest round-trip emissions among feasible options):",
    ));
    for (scenario, evaluations) in evaluations_by_scenario {
        let recommended = evaluations
            .iter()
            .filter(|e| e.is_feasible())
            .min_by_key(|e| e.round_trip_emissions());
        match recommended {
            Some(evaluation) => findings.push(format!(
                "   - {}: '{}' ({}).",
                scenario.name(),
                route_name(routes, evaluation.route()),
                evaluation.round_trip_emissions(),
            )),
            None => findings.push(format!(
                "   - {}: no feasible options.",
                scenario.name(),
            )),
        }
    }
}

fn total_of(totals: &[RouteTotals], route: RouteId) -> &RouteTotals {
    &totals[route.0 as usize]
}

fn route_name(routes: &Routes, id: RouteId) -> &str {
    routes.get(id).map(|route| route.name()).unwrap_or("?")
}
