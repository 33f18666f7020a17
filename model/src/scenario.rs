use crate::base_types::Days;

/// A trip-length budget against which every route is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    budget: Days,
}

impl Scenario {
    pub fn new(name: String, budget: Days) -> Scenario {
        Scenario { name, budget }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget_in_days(&self) -> Days {
        self.budget
    }
}
