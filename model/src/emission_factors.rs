use std::collections::HashMap;

use crate::base_types::GramsPerKm;
use crate::transport_mode::Mode;

/// Per-mode emission factors in grams CO2e per passenger-kilometer.
pub struct EmissionFactors {
    factors: HashMap<Mode, GramsPerKm>,
}

impl EmissionFactors {
    pub fn new(factors: HashMap<Mode, GramsPerKm>) -> EmissionFactors {
        EmissionFactors { factors }
    }

    pub fn get(&self, mode: Mode) -> Option<GramsPerKm> {
        self.factors.get(&mode).copied()
    }

    /// Iterates in the fixed mode order, skipping modes without a factor.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, GramsPerKm)> + '_ {
        Mode::ALL
            .iter()
            .filter_map(|mode| self.factors.get(mode).map(|factor| (*mode, *factor)))
    }
}
