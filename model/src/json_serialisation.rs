use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::accommodation::{Accommodation, AccommodationOptions};
use crate::base_types::{Days, Distance, Duration, Emissions, Euro, GramsPerKm, Id};
use crate::config::Config;
use crate::emission_factors::EmissionFactors;
use crate::geo::{Coord, Endpoints};
use crate::routes::{Route, Routes, Segment};
use crate::scenario::Scenario;
use crate::transport_mode::Mode;

const DEFAULT_TRANSFER_OVERHEAD_IN_HOURS: u32 = 1;
const DEFAULT_EMISSIONS_TOLERANCE_IN_KG: f64 = 0.1;

/// Everything the analysis needs, loaded and validated from one JSON input.
pub struct TravelInstance {
    pub emission_factors: EmissionFactors,
    pub routes: Routes,
    pub accommodation: AccommodationOptions,
    pub scenarios: Vec<Scenario>,
    pub config: Config,
    pub endpoints: Option<Endpoints>,
}

/// Malformed or missing input data. The computation itself cannot fail, so
/// every data problem is caught here, identifying the offending entry.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("input is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("no routes defined")]
    NoRoutes,
    #[error("duplicate route name '{0}'")]
    DuplicateRoute(String),
    #[error("route '{0}' has no segments")]
    EmptyRoute(String),
    #[error("segment '{segment}' of route '{route}' uses mode '{mode}' which has no emission factor")]
    MissingEmissionFactor {
        route: String,
        segment: String,
        mode: Mode,
    },
    #[error("route '{0}' declares neither a flat travel time nor durations on all of its segments")]
    MissingTravelTime(String),
    #[error("route '{0}' has a negative published round-trip emissions figure")]
    NegativePublishedEmissions(String),
    #[error("no accommodation options defined")]
    NoAccommodation,
    #[error("duplicate accommodation option '{0}'")]
    DuplicateAccommodation(String),
    #[error("no scenarios defined")]
    NoScenarios,
    #[error("duplicate scenario '{0}'")]
    DuplicateScenario(String),
    #[error("scenario '{0}' has a zero-day budget")]
    ZeroDayScenario(String),
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonSegment {
    mode: Mode,
    description: String,
    distance_in_km: u64,
    duration_in_hours: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRoute {
    name: String,
    segments: Vec<JsonSegment>,
    travel_time_in_hours: Option<u32>,
    round_trip_cost_in_euro: Euro,
    published_round_trip_emissions_in_kg: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonAccommodation {
    name: String,
    daily_rate_in_euro: Euro,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonScenario {
    name: String,
    budget_in_days: Days,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonCoord {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonEndpoints {
    origin: String,
    origin_coordinates: JsonCoord,
    destination: String,
    destination_coordinates: JsonCoord,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    transfer_overhead_in_hours: Option<u32>,
    emissions_tolerance_in_kg: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    emission_factors_in_g_per_km: HashMap<Mode, GramsPerKm>,
    routes: Vec<JsonRoute>,
    accommodation: Vec<JsonAccommodation>,
    scenarios: Vec<JsonScenario>,
    endpoints: Option<JsonEndpoints>,
    parameters: Option<JsonParameters>,
}

pub fn load_travel_instance_from_json(
    input_data: serde_json::Value,
) -> Result<TravelInstance, InputError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;

    let config = create_config(&json_input);
    let emission_factors = EmissionFactors::new(json_input.emission_factors_in_g_per_km.clone());
    let routes = create_routes(&json_input, &emission_factors, &config)?;
    let accommodation = create_accommodation(&json_input)?;
    let scenarios = create_scenarios(&json_input)?;
    let endpoints = create_endpoints(&json_input);

    Ok(TravelInstance {
        emission_factors,
        routes,
        accommodation,
        scenarios,
        config,
        endpoints,
    })
}

fn create_config(json_input: &JsonInput) -> Config {
    let transfer_overhead_in_hours = json_input
        .parameters
        .as_ref()
        .and_then(|p| p.transfer_overhead_in_hours)
        .unwrap_or(DEFAULT_TRANSFER_OVERHEAD_IN_HOURS);
    let emissions_tolerance_kg = json_input
        .parameters
        .as_ref()
        .and_then(|p| p.emissions_tolerance_in_kg)
        .unwrap_or(DEFAULT_EMISSIONS_TOLERANCE_IN_KG);
    Config {
        transfer_overhead: Duration::from_hours(transfer_overhead_in_hours),
        emissions_tolerance_kg,
    }
}

fn create_routes(
    json_input: &JsonInput,
    emission_factors: &EmissionFactors,
    config: &Config,
) -> Result<Routes, InputError> {
    if json_input.routes.is_empty() {
        return Err(InputError::NoRoutes);
    }

    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut routes: Vec<Route> = Vec::with_capacity(json_input.routes.len());

    for (index, json_route) in json_input.routes.iter().enumerate() {
        if !seen_names.insert(&json_route.name) {
            return Err(InputError::DuplicateRoute(json_route.name.clone()));
        }
        if json_route.segments.is_empty() {
            return Err(InputError::EmptyRoute(json_route.name.clone()));
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(json_route.segments.len());
        for json_segment in &json_route.segments {
            let factor = emission_factors.get(json_segment.mode).ok_or_else(|| {
                InputError::MissingEmissionFactor {
                    route: json_route.name.clone(),
                    segment: json_segment.description.clone(),
                    mode: json_segment.mode,
                }
            })?;
            segments.push(Segment::new(
                json_segment.mode,
                json_segment.description.clone(),
                Distance::from_meter(json_segment.distance_in_km * 1000),
                factor,
                json_segment.duration_in_hours.map(Duration::from_hours),
            ));
        }

        let one_way_travel_time =
            resolve_travel_time(json_route, &segments, config.transfer_overhead)?;

        let published_round_trip_emissions = match json_route.published_round_trip_emissions_in_kg
        {
            Some(kg) if kg < 0.0 => {
                return Err(InputError::NegativePublishedEmissions(
                    json_route.name.clone(),
                ))
            }
            Some(kg) => Some(Emissions::from_kg(kg)),
            None => None,
        };

        routes.push(Route::new(
            (index as Id).into(),
            json_route.name.clone(),
            segments,
            one_way_travel_time,
            json_route.round_trip_cost_in_euro,
            published_round_trip_emissions,
        ));
    }

    Ok(Routes::new(routes))
}

/// A declared flat travel time wins; otherwise the segment durations are
/// summed, with one transfer overhead per interchange.
fn resolve_travel_time(
    json_route: &JsonRoute,
    segments: &[Segment],
    transfer_overhead: Duration,
) -> Result<Duration, InputError> {
    if let Some(hours) = json_route.travel_time_in_hours {
        return Ok(Duration::from_hours(hours));
    }
    if segments.iter().any(|segment| segment.duration().is_none()) {
        return Err(InputError::MissingTravelTime(json_route.name.clone()));
    }
    let riding_time: Duration = segments.iter().filter_map(|segment| segment.duration()).sum();
    let interchanges = (segments.len() - 1) as u32;
    Ok(riding_time + Duration::from_minutes(transfer_overhead.in_min() * interchanges))
}

fn create_accommodation(json_input: &JsonInput) -> Result<AccommodationOptions, InputError> {
    if json_input.accommodation.is_empty() {
        return Err(InputError::NoAccommodation);
    }
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut options: Vec<Accommodation> = Vec::with_capacity(json_input.accommodation.len());
    for (index, json_accommodation) in json_input.accommodation.iter().enumerate() {
        if !seen_names.insert(&json_accommodation.name) {
            return Err(InputError::DuplicateAccommodation(
                json_accommodation.name.clone(),
            ));
        }
        options.push(Accommodation::new(
            (index as Id).into(),
            json_accommodation.name.clone(),
            json_accommodation.daily_rate_in_euro,
        ));
    }
    Ok(AccommodationOptions::new(options))
}

fn create_scenarios(json_input: &JsonInput) -> Result<Vec<Scenario>, InputError> {
    if json_input.scenarios.is_empty() {
        return Err(InputError::NoScenarios);
    }
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut scenarios: Vec<Scenario> = Vec::with_capacity(json_input.scenarios.len());
    for json_scenario in &json_input.scenarios {
        if !seen_names.insert(&json_scenario.name) {
            return Err(InputError::DuplicateScenario(json_scenario.name.clone()));
        }
        if json_scenario.budget_in_days == 0 {
            return Err(InputError::ZeroDayScenario(json_scenario.name.clone()));
        }
        scenarios.push(Scenario::new(
            json_scenario.name.clone(),
            json_scenario.budget_in_days,
        ));
    }
    Ok(scenarios)
}

fn create_endpoints(json_input: &JsonInput) -> Option<Endpoints> {
    json_input.endpoints.as_ref().map(|json_endpoints| Endpoints {
        origin: json_endpoints.origin.clone(),
        origin_coordinates: Coord {
            latitude: json_endpoints.origin_coordinates.latitude,
            longitude: json_endpoints.origin_coordinates.longitude,
        },
        destination: json_endpoints.destination.clone(),
        destination_coordinates: Coord {
            latitude: json_endpoints.destination_coordinates.latitude,
            longitude: json_endpoints.destination_coordinates.longitude,
        },
    })
}
