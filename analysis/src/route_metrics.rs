use model::base_types::{Days, Distance, Duration, Emissions, Euro};
use model::routes::Route;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Aggregated figures of a single route, independent of any trip budget.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTotals {
    one_way_duration: Duration,
    one_way_emissions: Emissions,
    total_distance: Distance,
    round_trip_cost: Euro,
}

impl RouteTotals {
    pub fn compute(route: &Route) -> RouteTotals {
        let one_way_emissions = route
            .segments()
            .iter()
            .map(|segment| Emissions::for_leg(segment.distance(), segment.emission_factor()))
            .sum();
        let total_distance = route.segments().iter().map(|segment| segment.distance()).sum();
        RouteTotals {
            one_way_duration: route.one_way_travel_time(),
            one_way_emissions,
            total_distance,
            round_trip_cost: route.round_trip_cost(),
        }
    }

    pub fn one_way_duration(&self) -> Duration {
        self.one_way_duration
    }

    pub fn round_trip_duration(&self) -> Duration {
        self.one_way_duration + self.one_way_duration
    }

    pub fn one_way_emissions(&self) -> Emissions {
        self.one_way_emissions
    }

    pub fn round_trip_emissions(&self) -> Emissions {
        self.one_way_emissions + self.one_way_emissions
    }

    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Flat round-trip transport cost, taken from the route declaration.
    pub fn round_trip_cost(&self) -> Euro {
        self.round_trip_cost
    }

    /// Travel days consumed by one leg, each started day counting fully.
    pub fn travel_days_one_way(&self) -> Days {
        self.one_way_duration.in_min().div_ceil(MINUTES_PER_DAY)
    }

    /// Outbound and return leg each round up to full days separately.
    pub fn travel_days_round_trip(&self) -> Days {
        2 * self.travel_days_one_way()
    }

    /// Gap in kg CO2e between the route's published round-trip emissions
    /// figure and the computed one, if it exceeds the tolerance. The computed
    /// figure always stands; the gap is only reported.
    pub fn consistency_gap(&self, route: &Route, tolerance_kg: f64) -> Option<f64> {
        let published = route.published_round_trip_emissions()?;
        let gap = published.in_kg() - self.round_trip_emissions().in_kg();
        if gap.abs() > tolerance_kg {
            Some(gap)
        } else {
            None
        }
    }
}
