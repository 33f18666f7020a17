use serde::{Deserialize, Serialize};
use std::fmt;

/// The transport modes a journey segment can use.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Plane,
    Train,
    Bus,
    Car,
    CarPool,
    Ship,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Plane,
        Mode::Train,
        Mode::Bus,
        Mode::Car,
        Mode::CarPool,
        Mode::Ship,
    ];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Plane => write!(f, "plane"),
            Mode::Train => write!(f, "train"),
            Mode::Bus => write!(f, "bus"),
            Mode::Car => write!(f, "car"),
            Mode::CarPool => write!(f, "car pool"),
            Mode::Ship => write!(f, "ship"),
        }
    }
}
