pub mod findings;
pub mod ranking;
pub mod route_metrics;
pub mod scenario_evaluation;

pub use ranking::Metric;
pub use route_metrics::RouteTotals;
pub use scenario_evaluation::ScenarioEvaluation;

#[cfg(test)]
mod test_utilities;
