use crate::base_types::{AccommodationId, Euro};

/// An accommodation option at the destination with a daily rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accommodation {
    id: AccommodationId,
    name: String,
    daily_rate: Euro,
}

impl Accommodation {
    pub fn new(id: AccommodationId, name: String, daily_rate: Euro) -> Accommodation {
        Accommodation {
            id,
            name,
            daily_rate,
        }
    }

    pub fn id(&self) -> AccommodationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn daily_rate(&self) -> Euro {
        self.daily_rate
    }
}

/// All accommodation options in input declaration order.
pub struct AccommodationOptions {
    options: Vec<Accommodation>,
}

impl AccommodationOptions {
    pub fn new(options: Vec<Accommodation>) -> AccommodationOptions {
        AccommodationOptions { options }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Accommodation> {
        self.options
            .iter()
            .find(|option| option.name.eq_ignore_ascii_case(name))
    }

    /// The option with the lowest daily rate (first on ties).
    pub fn cheapest(&self) -> Option<&Accommodation> {
        self.options.iter().min_by_key(|option| option.daily_rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Accommodation> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
