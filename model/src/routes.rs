use crate::base_types::{Distance, Duration, Emissions, Euro, GramsPerKm, RouteId};
use crate::transport_mode::Mode;

/// One leg of a journey. Immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    description: String,
    distance: Distance,
    emission_factor: GramsPerKm,
    duration: Option<Duration>,
}

impl Segment {
    pub fn new(
        mode: Mode,
        description: String,
        distance: Distance,
        emission_factor: GramsPerKm,
        duration: Option<Duration>,
    ) -> Segment {
        Segment {
            mode,
            description,
            distance,
            emission_factor,
            duration,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Grams CO2e per passenger-kilometer, resolved from the factor table at
    /// load time.
    pub fn emission_factor(&self) -> GramsPerKm {
        self.emission_factor
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

/// An ordered sequence of segments representing one travel option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: RouteId,
    name: String,
    segments: Vec<Segment>,
    one_way_travel_time: Duration,
    round_trip_cost: Euro,
    published_round_trip_emissions: Option<Emissions>,
}

impl Route {
    pub fn new(
        id: RouteId,
        name: String,
        segments: Vec<Segment>,
        one_way_travel_time: Duration,
        round_trip_cost: Euro,
        published_round_trip_emissions: Option<Emissions>,
    ) -> Route {
        Route {
            id,
            name,
            segments,
            one_way_travel_time,
            round_trip_cost,
            published_round_trip_emissions,
        }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// One-way travel time including transfers.
    pub fn one_way_travel_time(&self) -> Duration {
        self.one_way_travel_time
    }

    /// Flat round-trip transport cost estimate (not derived from segments).
    pub fn round_trip_cost(&self) -> Euro {
        self.round_trip_cost
    }

    /// Round-trip emissions figure quoted by the source material, if any.
    /// Only used for the data-consistency check, never for computation.
    pub fn published_round_trip_emissions(&self) -> Option<Emissions> {
        self.published_round_trip_emissions
    }
}

/// All routes in input declaration order.
pub struct Routes {
    routes: Vec<Route>,
}

impl Routes {
    pub fn new(routes: Vec<Route>) -> Routes {
        Routes { routes }
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
