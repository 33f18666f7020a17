use std::path::Path;

use analysis::Metric;

use crate::{csv_export, json_export, report, run, AnalysisOptions, AppError};

fn test_input() -> &'static Path {
    Path::new("resources/analysis_test_input.json")
}

#[test]
fn full_analysis_of_the_test_instance() {
    let result = run(test_input(), &AnalysisOptions::default()).unwrap();

    assert_eq!(result.instance.routes.len(), 3);
    assert_eq!(result.blocks.len(), 2);
    assert_eq!(result.ranking_accommodation, "hostel");

    // published figure 2307.7 kg equals the computed round trip exactly
    assert!(result.consistency_warnings.is_empty());

    let week = &result.blocks[0];
    assert_eq!(week.scenario.name(), "1-week");
    assert!(week.evaluations[0].is_feasible());
    assert_eq!(week.evaluations[0].days_at_destination(), 5);
    assert!(!week.evaluations[1].is_feasible());
    assert!(!week.evaluations[2].is_feasible());
    // only the air route survives the one-week budget
    assert_eq!(week.ranking.len(), 1);

    let month = &result.blocks[1];
    assert_eq!(month.ranking.len(), 3);
    // lowest total emissions first: Land & Sea
    assert_eq!(
        result.instance.routes.get(month.ranking[0]).unwrap().name(),
        "Land & Sea"
    );

    assert!(!result.findings.is_empty());
}

#[test]
fn report_contains_all_sections() {
    let result = run(test_input(), &AnalysisOptions::default()).unwrap();
    let report = report::render(&result);

    assert!(report.contains("# Eco-Friendly Travel Analysis"));
    assert!(report.contains("Direct distance Grenoble -> Abuja:"));
    assert!(report.contains("## Emission factors"));
    assert!(report.contains("| plane | 250 |"));
    assert!(report.contains("## Route totals"));
    assert!(report.contains("## Scenario: 1-week (7 days)"));
    assert!(report.contains("## Scenario: 1-month (30 days)"));
    assert!(report.contains("970 EUR"));
    assert!(report.contains("Ranked by total emissions:"));
    assert!(report.contains("## Key findings"));
}

#[test]
fn scenario_can_be_selected_by_budget() {
    let options = AnalysisOptions {
        scenario: Some(String::from("7")),
        ..AnalysisOptions::default()
    };
    let result = run(test_input(), &options).unwrap();

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].scenario.name(), "1-week");
}

#[test]
fn accommodation_filter_restricts_cost_columns() {
    let options = AnalysisOptions {
        accommodation: Some(String::from("hotel")),
        ..AnalysisOptions::default()
    };
    let result = run(test_input(), &options).unwrap();

    assert_eq!(result.instance.accommodation.len(), 1);
    assert_eq!(result.ranking_accommodation, "hotel");
    let report = report::render(&result);
    assert!(report.contains("Cost (hotel)"));
    assert!(!report.contains("Cost (hostel)"));
}

#[test]
fn unknown_scenario_is_an_error() {
    let options = AnalysisOptions {
        scenario: Some(String::from("2-weeks")),
        ..AnalysisOptions::default()
    };
    let result = run(test_input(), &options);
    assert!(matches!(result, Err(AppError::UnknownScenario(name)) if name == "2-weeks"));
}

#[test]
fn unknown_accommodation_is_an_error() {
    let options = AnalysisOptions {
        accommodation: Some(String::from("palace")),
        ..AnalysisOptions::default()
    };
    let result = run(test_input(), &options);
    assert!(matches!(result, Err(AppError::UnknownAccommodation(name)) if name == "palace"));
}

#[test]
fn missing_input_file_is_an_error() {
    let result = run(Path::new("resources/no_such_file.json"), &AnalysisOptions::default());
    assert!(matches!(result, Err(AppError::ReadInput { .. })));
}

#[test]
fn csv_export_has_one_row_per_scenario_route_and_accommodation() {
    let result = run(test_input(), &AnalysisOptions::default()).unwrap();
    let mut buffer: Vec<u8> = Vec::new();
    csv_export::write_scenario_table(&result, &mut buffer).unwrap();

    let csv = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    // header plus 2 scenarios x 3 routes x 3 accommodation options
    assert_eq!(lines.len(), 1 + 2 * 3 * 3);
    assert!(lines[0].starts_with("scenario,route,accommodation"));
    assert!(csv.contains("1-week,Air Travel,hostel,2,5,2307.7,461.54,970,Feasible"));
}

#[test]
fn json_export_mirrors_the_result() {
    let options = AnalysisOptions {
        metric: Metric::TotalCost,
        ..AnalysisOptions::default()
    };
    let result = run(test_input(), &options).unwrap();
    let value = json_export::results_to_json(&result);

    assert_eq!(value["metric"], "total cost");
    assert_eq!(value["routes"].as_array().unwrap().len(), 3);
    assert_eq!(value["routes"][0]["name"], "Air Travel");
    assert_eq!(value["routes"][0]["roundTripCostInEuro"], 820);
    let week = &value["scenarios"][0];
    assert_eq!(week["budgetInDays"], 7);
    assert_eq!(week["evaluations"][0]["feasible"], true);
    assert_eq!(week["evaluations"][0]["totalCostInEuro"]["hostel"], 970);
    assert_eq!(week["evaluations"][1]["feasible"], false);
    assert_eq!(
        week["evaluations"][1]["totalCostInEuro"]["hostel"],
        serde_json::Value::Null
    );
}
