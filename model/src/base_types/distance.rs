use crate::base_types::Meter;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Distance(Meter);

// methods:
impl Distance {
    pub fn in_meter(&self) -> Meter {
        self.0
    }

    pub fn in_km(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

// static functions:
impl Distance {
    pub const ZERO: Distance = Distance(0);

    pub fn from_meter(m: Meter) -> Distance {
        Distance(m)
    }

    pub fn from_km(km: f64) -> Distance {
        Distance((km * 1000.0).round() as Meter)
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl Sum<Self> for Distance {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Distance::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.0 % 1000;
        let km = (self.0 - m) / 1000;
        write!(f, "{}.{:03}km", km, m)
    }
}
