use std::io;

use crate::AnalysisResult;

/// Writes the scenario evaluation as a flat table, one row per scenario,
/// route, and accommodation option. Empty cells stand for undefined values
/// of infeasible trips.
pub fn write_scenario_table<W: io::Write>(
    result: &AnalysisResult,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "scenario",
        "route",
        "accommodation",
        "travelDaysRoundTrip",
        "daysAtDestination",
        "roundTripEmissionsKg",
        "emissionsPerVacationDayKg",
        "totalCostEur",
        "feasibility",
    ])?;

    for block in &result.blocks {
        for evaluation in &block.evaluations {
            let route_name = result
                .instance
                .routes
                .get(evaluation.route())
                .map(|route| route.name())
                .unwrap_or("?");
            for accommodation in result.instance.accommodation.iter() {
                csv_writer.write_record(vec![
                    block.scenario.name().to_string(),
                    route_name.to_string(),
                    accommodation.name().to_string(),
                    evaluation.travel_days_round_trip().to_string(),
                    evaluation.days_at_destination().to_string(),
                    format!("{:.1}", evaluation.round_trip_emissions().in_kg()),
                    evaluation
                        .emissions_per_day()
                        .map(|per_day| format!("{:.2}", per_day))
                        .unwrap_or_default(),
                    evaluation
                        .cost_with(accommodation)
                        .map(|cost| cost.to_string())
                        .unwrap_or_default(),
                    if evaluation.is_feasible() {
                        String::from("Feasible")
                    } else {
                        String::from("Not feasible")
                    },
                ])?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}
