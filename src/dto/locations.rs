use serde::Serialize;

use crate::domain::space::Location;

/// A location suggestion shown in the autocomplete dropdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationSuggestion {
    pub id: i32,
    pub city: String,
    pub area: String,
    pub label: String,
}

impl From<Location> for LocationSuggestion {
    fn from(value: Location) -> Self {
        let label = value.label();
        Self {
            id: value.id.get(),
            city: value.city,
            area: value.area,
            label,
        }
    }
}
