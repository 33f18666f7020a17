use model::geo::great_circle_distance;

use crate::AnalysisResult;

/// Renders the full analysis as a Markdown-style text report.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("# Eco-Friendly Travel Analysis\n\n");

    if let Some(endpoints) = &result.instance.endpoints {
        let direct = great_circle_distance(
            endpoints.origin_coordinates,
            endpoints.destination_coordinates,
        );
        out.push_str(&format!(
            "Direct distance {} -> {}: {:.0} km (great circle).\n\n",
            endpoints.origin,
            endpoints.destination,
            direct.in_km(),
        ));
    }

    render_emission_factors(result, &mut out);
    render_route_totals(result, &mut out);
    for block in &result.blocks {
        render_scenario(result, block, &mut out);
    }
    render_findings(result, &mut out);
    render_consistency_warnings(result, &mut out);

    out
}

fn render_emission_factors(result: &AnalysisResult, out: &mut String) {
    out.push_str("## Emission factors\n\n");
    out.push_str("| Mode | gCO2e per passenger-km |\n");
    out.push_str("|------|-----------------------:|\n");
    for (mode, factor) in result.instance.emission_factors.iter() {
        out.push_str(&format!("| {} | {} |\n", mode, factor));
    }
    out.push('\n');
}

fn render_route_totals(result: &AnalysisResult, out: &mut String) {
    out.push_str("## Route totals\n\n");
    out.push_str(
        "| Route | Distance | One-way time | Round-trip time | One-way emissions | Round-trip emissions | Round-trip cost |\n",
    );
    out.push_str("|-------|---------:|-------------:|----------------:|------------------:|---------------------:|----------------:|\n");
    for (route, totals) in result.instance.routes.iter().zip(result.totals.iter()) {
        out.push_str(&format!(
            "| {} | {:.0} km | {} | {} | {} | {} | {} EUR |\n",
            route.name(),
            totals.total_distance().in_km(),
            totals.one_way_duration(),
            totals.round_trip_duration(),
            totals.one_way_emissions(),
            totals.round_trip_emissions(),
            totals.round_trip_cost(),
        ));
    }
    out.push('\n');
}

fn render_scenario(result: &AnalysisResult, block: &crate::ScenarioBlock, out: &mut String) {
    out.push_str(&format!(
        "## Scenario: {} ({} days)\n\n",
        block.scenario.name(),
        block.scenario.budget_in_days(),
    ));

    out.push_str("| Route | Feasible | Travel days | Days at destination | Round-trip emissions | Emissions per day |");
    for accommodation in result.instance.accommodation.iter() {
        out.push_str(&format!(" Cost ({}) |", accommodation.name()));
    }
    out.push('\n');
    out.push_str("|-------|----------|------------:|--------------------:|---------------------:|------------------:|");
    for _ in result.instance.accommodation.iter() {
        out.push_str("----------:|");
    }
    out.push('\n');

    for evaluation in &block.evaluations {
        let route_name = result
            .instance
            .routes
            .get(evaluation.route())
            .map(|route| route.name())
            .unwrap_or("?");
        let days_at_destination = if evaluation.is_feasible() {
            evaluation.days_at_destination().to_string()
        } else {
            String::from("-")
        };
        let emissions_per_day = evaluation
            .emissions_per_day()
            .map(|per_day| format!("{:.2} kg", per_day))
            .unwrap_or_else(|| String::from("-"));

        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |",
            route_name,
            if evaluation.is_feasible() { "yes" } else { "no" },
            evaluation.travel_days_round_trip(),
            days_at_destination,
            evaluation.round_trip_emissions(),
            emissions_per_day,
        ));
        for accommodation in result.instance.accommodation.iter() {
            let cost = evaluation
                .cost_with(accommodation)
                .map(|cost| format!("{} EUR", cost))
                .unwrap_or_else(|| String::from("-"));
            out.push_str(&format!(" {} |", cost));
        }
        out.push('\n');
    }
    out.push('\n');

    render_ranking(result, block, out);
}

fn render_ranking(result: &AnalysisResult, block: &crate::ScenarioBlock, out: &mut String) {
    if block.ranking.is_empty() {
        out.push_str("No feasible route for this scenario.\n\n");
        return;
    }

    match result.metric {
        analysis::Metric::TotalCost => out.push_str(&format!(
            "Ranked by {} ({} accommodation):\n\n",
            result.metric, result.ranking_accommodation,
        )),
        _ => out.push_str(&format!("Ranked by {}:\n\n", result.metric)),
    }

    let ranking_accommodation = result
        .instance
        .accommodation
        .get_by_name(&result.ranking_accommodation);
    for (position, route_id) in block.ranking.iter().enumerate() {
        let route_name = result
            .instance
            .routes
            .get(*route_id)
            .map(|route| route.name())
            .unwrap_or("?");
        let value = block
            .evaluations
            .iter()
            .find(|evaluation| evaluation.route() == *route_id)
            .zip(ranking_accommodation)
            .and_then(|(evaluation, accommodation)| {
                result.metric.value_of(evaluation, accommodation)
            });
        match value {
            Some(value) => out.push_str(&format!(
                "{}. {} ({})\n",
                position + 1,
                route_name,
                format_metric_value(result.metric, value),
            )),
            None => out.push_str(&format!("{}. {}\n", position + 1, route_name)),
        }
    }
    out.push('\n');
}

fn format_metric_value(metric: analysis::Metric, value: f64) -> String {
    match metric {
        analysis::Metric::TotalEmissions => format!("{:.1} kg CO2e", value),
        analysis::Metric::EmissionsPerDay => format!("{:.2} kg CO2e/day", value),
        analysis::Metric::TotalCost => format!("{:.0} EUR", value),
    }
}

fn render_findings(result: &AnalysisResult, out: &mut String) {
    out.push_str("## Key findings\n\n");
    for finding in &result.findings {
        out.push_str(finding);
        out.push('\n');
    }
    out.push('\n');
}

fn render_consistency_warnings(result: &AnalysisResult, out: &mut String) {
    if result.consistency_warnings.is_empty() {
        return;
    }
    out.push_str("## Data consistency\n\n");
    for warning in &result.consistency_warnings {
        out.push_str(&format!("- {}\n", warning));
    }
    out.push('\n');
}
