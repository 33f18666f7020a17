pub mod accommodation;
pub mod base_types;
pub mod config;
pub mod emission_factors;
pub mod geo;
pub mod json_serialisation;
pub mod routes;
pub mod scenario;
pub mod transport_mode;

#[cfg(test)]
mod json_serialisation_tests;
