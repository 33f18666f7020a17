use crate::base_types::{Distance, Gram, GramsPerKm};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Carbon emissions in grams CO2-equivalent, stored exactly.
///
/// Inputs are whole kilometers and integer emission factors, so per-segment
/// emissions stay exact; rounding only happens on display.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Emissions(Gram);

// methods:
impl Emissions {
    pub fn in_gram(&self) -> Gram {
        self.0
    }

    pub fn in_kg(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

// static functions:
impl Emissions {
    pub const ZERO: Emissions = Emissions(0);

    pub fn from_gram(g: Gram) -> Emissions {
        Emissions(g)
    }

    pub fn from_kg(kg: f64) -> Emissions {
        Emissions((kg * 1000.0).round() as Gram)
    }

    /// Emissions of one person travelling the given distance with a mode of
    /// the given emission factor (round-half-up at the gram level).
    pub fn for_leg(distance: Distance, factor: GramsPerKm) -> Emissions {
        Emissions((distance.in_meter() * factor + 500) / 1000)
    }
}

impl Add for Emissions {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Emissions(self.0 + other.0)
    }
}

impl Sum<Self> for Emissions {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Emissions::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Emissions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1} kg CO2e", self.in_kg())
    }
}
