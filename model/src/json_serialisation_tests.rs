use std::{fs::File, io::Read};

use serde_json::json;

use crate::{
    base_types::{Distance, Duration, Emissions, RouteId},
    json_serialisation::{load_travel_instance_from_json, InputError, TravelInstance},
    transport_mode::Mode,
};

fn load_test_instance() -> TravelInstance {
    let mut file = File::open("resources/small_test_input.json").unwrap();
    let mut input_data = String::new();
    file.read_to_string(&mut input_data).unwrap();
    let input_data: serde_json::Value = serde_json::from_str(&input_data).unwrap();
    load_travel_instance_from_json(input_data).unwrap()
}

#[test]
fn test_load_from_json() {
    let instance = load_test_instance();

    assert_eq!(instance.emission_factors.get(Mode::Plane), Some(250));
    assert_eq!(instance.emission_factors.get(Mode::Train), Some(35));
    assert_eq!(instance.emission_factors.get(Mode::Bus), Some(25));
    assert_eq!(instance.emission_factors.get(Mode::Car), Some(165));
    assert_eq!(instance.emission_factors.get(Mode::CarPool), Some(42));
    assert_eq!(instance.emission_factors.get(Mode::Ship), Some(18));

    assert_eq!(instance.routes.len(), 3);
    let air = instance.routes.get(RouteId::from(0)).unwrap();
    assert_eq!(air.name(), "Air Travel");
    assert_eq!(air.segments().len(), 3);
    assert_eq!(air.one_way_travel_time(), Duration::from_hours(10));
    assert_eq!(air.round_trip_cost(), 820);
    assert_eq!(
        air.published_round_trip_emissions(),
        Some(Emissions::from_kg(2307.7))
    );

    let first_segment = &air.segments()[0];
    assert_eq!(first_segment.mode(), Mode::Train);
    assert_eq!(
        first_segment.description(),
        "Grenoble to Lyon St Exupery Airport (LYS)"
    );
    assert_eq!(first_segment.distance(), Distance::from_meter(110_000));
    assert_eq!(first_segment.emission_factor(), 35);
    assert_eq!(first_segment.duration(), None);

    let mixed = instance.routes.get(RouteId::from(1)).unwrap();
    assert_eq!(mixed.name(), "Mixed Transport");
    assert_eq!(mixed.segments().len(), 4);
    assert_eq!(mixed.one_way_travel_time(), Duration::from_hours(175));
    assert_eq!(mixed.published_round_trip_emissions(), None);

    let land_and_sea = instance.routes.get(RouteId::from(2)).unwrap();
    assert_eq!(land_and_sea.name(), "Land & Sea");
    assert_eq!(land_and_sea.segments().len(), 5);
    assert_eq!(land_and_sea.round_trip_cost(), 1150);

    assert_eq!(instance.accommodation.len(), 3);
    assert_eq!(instance.accommodation.cheapest().unwrap().name(), "hostel");
    assert_eq!(
        instance.accommodation.get_by_name("Hotel").unwrap().daily_rate(),
        90
    );

    assert_eq!(instance.scenarios.len(), 2);
    assert_eq!(instance.scenarios[0].name(), "1-week");
    assert_eq!(instance.scenarios[0].budget_in_days(), 7);
    assert_eq!(instance.scenarios[1].name(), "1-month");
    assert_eq!(instance.scenarios[1].budget_in_days(), 30);

    let endpoints = instance.endpoints.unwrap();
    assert_eq!(endpoints.origin, "Grenoble");
    assert_eq!(endpoints.destination, "Abuja");
    assert!((endpoints.origin_coordinates.latitude - 45.1885).abs() < 1e-9);

    assert_eq!(instance.config.transfer_overhead, Duration::from_hours(1));
    assert!((instance.config.emissions_tolerance_kg - 0.1).abs() < 1e-9);
}

fn minimal_input() -> serde_json::Value {
    json!({
        "emissionFactorsInGPerKm": { "train": 35, "bus": 25 },
        "routes": [
            {
                "name": "Overland",
                "segments": [
                    { "mode": "train", "description": "A to B", "distanceInKm": 300 },
                    { "mode": "bus", "description": "B to C", "distanceInKm": 200 }
                ],
                "travelTimeInHours": 12,
                "roundTripCostInEuro": 150
            }
        ],
        "accommodation": [ { "name": "hostel", "dailyRateInEuro": 30 } ],
        "scenarios": [ { "name": "1-week", "budgetInDays": 7 } ]
    })
}

#[test]
fn test_travel_time_derived_from_segment_durations() {
    let mut input = minimal_input();
    let route = &mut input["routes"][0];
    route["travelTimeInHours"] = json!(null);
    route["segments"][0]["durationInHours"] = json!(3);
    route["segments"][1]["durationInHours"] = json!(4);

    let instance = load_travel_instance_from_json(input).unwrap();
    let route = instance.routes.get(RouteId::from(0)).unwrap();

    // 3h + 4h riding plus one interchange of 1h default overhead
    assert_eq!(route.one_way_travel_time(), Duration::from_hours(8));
}

#[test]
fn test_route_without_any_travel_time_is_rejected() {
    let mut input = minimal_input();
    input["routes"][0]["travelTimeInHours"] = json!(null);
    input["routes"][0]["segments"][0]["durationInHours"] = json!(3);

    let result = load_travel_instance_from_json(input);
    assert!(matches!(result, Err(InputError::MissingTravelTime(name)) if name == "Overland"));
}

#[test]
fn test_route_without_segments_is_rejected() {
    let mut input = minimal_input();
    input["routes"][0]["segments"] = json!([]);

    let result = load_travel_instance_from_json(input);
    assert!(matches!(result, Err(InputError::EmptyRoute(name)) if name == "Overland"));
}

#[test]
fn test_missing_emission_factor_is_rejected() {
    let mut input = minimal_input();
    input["routes"][0]["segments"][1]["mode"] = json!("ship");

    let result = load_travel_instance_from_json(input);
    assert!(matches!(
        result,
        Err(InputError::MissingEmissionFactor { route, mode: Mode::Ship, .. }) if route == "Overland"
    ));
}

#[test]
fn test_duplicate_route_name_is_rejected() {
    let mut input = minimal_input();
    let route = input["routes"][0].clone();
    input["routes"].as_array_mut().unwrap().push(route);

    let result = load_travel_instance_from_json(input);
    assert!(matches!(result, Err(InputError::DuplicateRoute(name)) if name == "Overland"));
}

#[test]
fn test_zero_day_scenario_is_rejected() {
    let mut input = minimal_input();
    input["scenarios"][0]["budgetInDays"] = json!(0);

    let result = load_travel_instance_from_json(input);
    assert!(matches!(result, Err(InputError::ZeroDayScenario(name)) if name == "1-week"));
}

#[test]
fn test_empty_scenario_list_is_rejected() {
    let mut input = minimal_input();
    input["scenarios"] = json!([]);

    assert!(matches!(
        load_travel_instance_from_json(input),
        Err(InputError::NoScenarios)
    ));
}

#[test]
fn test_negative_distance_fails_deserialisation() {
    let mut input = minimal_input();
    input["routes"][0]["segments"][0]["distanceInKm"] = json!(-300);

    assert!(matches!(
        load_travel_instance_from_json(input),
        Err(InputError::MalformedJson(_))
    ));
}

#[test]
fn test_negative_published_emissions_are_rejected() {
    let mut input = minimal_input();
    input["routes"][0]["publishedRoundTripEmissionsInKg"] = json!(-1.0);

    let result = load_travel_instance_from_json(input);
    assert!(
        matches!(result, Err(InputError::NegativePublishedEmissions(name)) if name == "Overland")
    );
}
