use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative travel duration with minute precision.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Duration {
    hours: u32,
    minutes: u8,
}

impl Duration {
    pub fn in_min(&self) -> u32 {
        self.hours * 60 + self.minutes as u32
    }
}

impl Duration {
    pub const ZERO: Duration = Duration {
        hours: 0,
        minutes: 0,
    };

    pub fn new(string: &str) -> Duration {
        // "hh:mm"
        let splitted: Vec<&str> = string.split(':').collect();
        assert!(
            splitted.len() == 2,
            "Wrong duration format! string: {}",
            string
        );
        let hours: u32 = splitted[0].parse().expect("Error at hour.");
        let minutes: u8 = splitted[1].parse().expect("Error at minute.");
        assert!(minutes < 60, "Wrong minute format.");
        Duration { hours, minutes }
    }

    pub fn from_hours(hours: u32) -> Duration {
        Duration { hours, minutes: 0 }
    }

    pub fn from_minutes(minutes: u32) -> Duration {
        Duration {
            hours: minutes / 60,
            minutes: (minutes % 60) as u8,
        }
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Duration::from_minutes(self.in_min() + other.in_min())
    }
}

impl Sum<Self> for Duration {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Duration::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}h", self.hours, self.minutes)
    }
}
