use derive_more::Display;
use derive_more::From;

pub mod distance;
pub mod duration;
pub mod emissions;

pub use distance::Distance;
pub use duration::Duration;
pub use emissions::Emissions;

pub type Id = u16;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(pub Id);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccommodationId(pub Id);

pub type Meter = u64;
pub type Gram = u64;
pub type GramsPerKm = u64; // grams CO2e per passenger-kilometer
pub type Euro = u64;
pub type Days = u32;
