use serde::Serialize;

use crate::domain::pricing::PricingBreakdown;
use crate::domain::space::{Space, SpaceType};
use crate::forms::filter::{FilterSpacesPayload, LocationFilter};

/// A space in a filter result, annotated with slot pricing when a full time
/// slot was requested.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilteredSpace {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hourly_rate: f64,
    pub description: Option<String>,
    pub type_name: String,
    pub type_slug: String,
    pub city: String,
    pub area: String,
    pub location_label: String,
    pub duration_hours: Option<f64>,
    pub total_price: Option<f64>,
    pub pricing: Option<PricingBreakdown>,
}

impl FilteredSpace {
    /// Annotate a space with the pricing computed for the requested slot.
    pub fn with_pricing(space: Space, pricing: PricingBreakdown) -> Self {
        let mut dto = Self::without_slot(space);
        dto.duration_hours = Some(pricing.duration_hours);
        dto.total_price = Some(pricing.total_price);
        dto.pricing = Some(pricing);
        dto
    }

    /// A space listed without a requested slot: available by default for
    /// display purposes, with null pricing fields.
    pub fn without_slot(space: Space) -> Self {
        let location_label = space.location_label();
        Self {
            id: space.id.get(),
            name: space.name.into_inner(),
            capacity: space.capacity.get(),
            hourly_rate: space.hourly_rate.get(),
            description: space.description,
            type_name: space.type_name,
            type_slug: space.type_slug,
            city: space.city,
            area: space.area,
            location_label,
            duration_hours: None,
            total_price: None,
            pricing: None,
        }
    }
}

/// Echo of the filters that were actually applied, people floored at one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppliedFilters {
    pub space_type: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub capacity: i32,
    pub people: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_term: Option<String>,
}

impl From<&FilterSpacesPayload> for AppliedFilters {
    fn from(payload: &FilterSpacesPayload) -> Self {
        let (location_id, location_term) = match &payload.location {
            Some(LocationFilter::Id(id)) => (Some(id.get()), None),
            Some(LocationFilter::Term(term)) => (None, Some(term.clone())),
            None => (None, None),
        };
        Self {
            space_type: payload.space_type.clone(),
            date: payload.date.map(|d| d.format("%Y-%m-%d").to_string()),
            start_time: payload.start_time.map(|t| t.format("%H:%M").to_string()),
            end_time: payload.end_time.map(|t| t.format("%H:%M").to_string()),
            capacity: payload.people.get(),
            people: payload.people.get(),
            location_id,
            location_term,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpaceTypeDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl From<SpaceType> for SpaceTypeDto {
    fn from(value: SpaceType) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            slug: value.slug,
        }
    }
}
