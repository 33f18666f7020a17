use crate::base_types::Duration;

pub struct Config {
    /// Added once per interchange when a route's travel time is derived from
    /// its segment durations instead of a declared flat figure.
    pub transfer_overhead: Duration,
    /// Maximal accepted gap (in kg CO2e) between a published round-trip
    /// emissions figure and the computed one before it is flagged.
    pub emissions_tolerance_kg: f64,
}
