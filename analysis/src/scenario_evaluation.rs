use model::accommodation::Accommodation;
use model::base_types::{Days, Emissions, Euro, RouteId};
use model::scenario::Scenario;

use crate::route_metrics::RouteTotals;

/// One route evaluated against one trip-length budget.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioEvaluation {
    route: RouteId,
    budget: Days,
    travel_days_round_trip: Days,
    days_at_destination: i64,
    round_trip_emissions: Emissions,
    round_trip_cost: Euro,
}

impl ScenarioEvaluation {
    pub fn evaluate(scenario: &Scenario, route: RouteId, totals: &RouteTotals) -> ScenarioEvaluation {
        let travel_days_round_trip = totals.travel_days_round_trip();
        let days_at_destination =
            scenario.budget_in_days() as i64 - travel_days_round_trip as i64;
        ScenarioEvaluation {
            route,
            budget: scenario.budget_in_days(),
            travel_days_round_trip,
            days_at_destination,
            round_trip_emissions: totals.round_trip_emissions(),
            round_trip_cost: totals.round_trip_cost(),
        }
    }

    pub fn route(&self) -> RouteId {
        self.route
    }

    pub fn budget_in_days(&self) -> Days {
        self.budget
    }

    pub fn travel_days_round_trip(&self) -> Days {
        self.travel_days_round_trip
    }

    /// Negative when the round trip alone does not fit into the budget.
    pub fn days_at_destination(&self) -> i64 {
        self.days_at_destination
    }

    /// A trip is feasible as long as the round trip fits into the budget,
    /// even when no full day remains at the destination.
    pub fn is_feasible(&self) -> bool {
        self.days_at_destination >= 0
    }

    pub fn round_trip_emissions(&self) -> Emissions {
        self.round_trip_emissions
    }

    /// Round-trip emissions spread over the days at the destination.
    /// Undefined for infeasible trips and for trips with zero days there.
    pub fn emissions_per_day(&self) -> Option<f64> {
        if self.days_at_destination > 0 {
            Some(self.round_trip_emissions.in_kg() / self.days_at_destination as f64)
        } else {
            None
        }
    }

    /// Transport plus accommodation for the whole stay. Exact integer
    /// arithmetic; `None` for infeasible trips.
    pub fn cost_with(&self, accommodation: &Accommodation) -> Option<Euro> {
        if self.is_feasible() {
            Some(
                self.round_trip_cost
                    + self.days_at_destination as Euro * accommodation.daily_rate(),
            )
        } else {
            None
        }
    }
}
