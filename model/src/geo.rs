use crate::base_types::Distance;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

/// Origin and destination of the journey, for the direct-distance figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub origin: String,
    pub origin_coordinates: Coord,
    pub destination: String,
    pub destination_coordinates: Coord,
}

/// Great-circle distance between two coordinates (haversine formula).
pub fn great_circle_distance(from: Coord, to: Coord) -> Distance {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    Distance::from_km(EARTH_RADIUS_KM * c)
}
