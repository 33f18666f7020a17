use model::accommodation::{Accommodation, AccommodationOptions};
use model::base_types::{Distance, Duration, Emissions, GramsPerKm, Id};
use model::routes::{Route, Routes, Segment};
use model::scenario::Scenario;
use model::transport_mode::Mode;

pub fn segment(mode: Mode, description: &str, km: u64, factor: GramsPerKm) -> Segment {
    Segment::new(
        mode,
        String::from(description),
        Distance::from_meter(km * 1000),
        factor,
        None,
    )
}

/// 10h one-way, 1152.5 kg CO2e one-way, published round-trip figure 2307.7 kg
/// (2.7 kg above the doubled one-way figure).
pub fn air_travel(id: Id) -> Route {
    Route::new(
        id.into(),
        String::from("Air Travel"),
        vec![segment(Mode::Plane, "Origin to destination", 4610, 250)],
        Duration::from_hours(10),
        820,
        Some(Emissions::from_kg(2307.7)),
    )
}

/// 175h one-way, 210.4 kg CO2e one-way.
pub fn mixed_transport(id: Id) -> Route {
    Route::new(
        id.into(),
        String::from("Mixed Transport"),
        vec![
            segment(Mode::Train, "Grenoble to Marseille", 300, 35),
            segment(Mode::Ship, "Marseille to Tangier", 1800, 18),
            segment(Mode::Bus, "Tangier to Dakar", 3500, 25),
            segment(Mode::Bus, "Dakar to Abuja", 3200, 25),
        ],
        Duration::from_hours(175),
        1200,
        None,
    )
}

/// 165h one-way, 177.25 kg CO2e one-way.
pub fn land_and_sea(id: Id) -> Route {
    Route::new(
        id.into(),
        String::from("Land & Sea"),
        vec![
            segment(Mode::Train, "Grenoble to Barcelona", 650, 35),
            segment(Mode::Ship, "Barcelona to Tangier", 1500, 18),
            segment(Mode::Bus, "Tangier across Morocco", 1200, 25),
            segment(Mode::Bus, "Western Sahara to Senegal", 1500, 25),
            segment(Mode::Bus, "Senegal to Abuja", 2400, 25),
        ],
        Duration::from_hours(165),
        1150,
        None,
    )
}

pub fn default_routes() -> Routes {
    Routes::new(vec![air_travel(0), mixed_transport(1), land_and_sea(2)])
}

pub fn default_accommodation() -> AccommodationOptions {
    AccommodationOptions::new(vec![
        Accommodation::new(0.into(), String::from("hotel"), 90),
        Accommodation::new(1.into(), String::from("hostel"), 30),
        Accommodation::new(2.into(), String::from("airbnb"), 50),
    ])
}

pub fn one_week() -> Scenario {
    Scenario::new(String::from("1-week"), 7)
}

pub fn one_month() -> Scenario {
    Scenario::new(String::from("1-month"), 30)
}
