use diesel::prelude::*;

use crate::domain::space::{Location as DomainLocation, Space as DomainSpace, SpaceType as DomainSpaceType};
use crate::domain::types::{Capacity, HourlyRate, LocationId, SpaceId, SpaceName, SpaceTypeId, TypeConstraintError};

/// Row produced by joining `spaces` with `space_types` and `locations`.
#[derive(Debug, Clone, Queryable)]
pub struct Space {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hourly_rate: f64,
    pub description: Option<String>,
    pub type_name: String,
    pub type_slug: String,
    pub city: String,
    pub area: String,
}

impl TryFrom<Space> for DomainSpace {
    type Error = TypeConstraintError;

    fn try_from(space: Space) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SpaceId::new(space.id)?,
            name: SpaceName::new(space.name)?,
            capacity: Capacity::new(space.capacity)?,
            hourly_rate: HourlyRate::new(space.hourly_rate)?,
            description: space.description,
            type_name: space.type_name,
            type_slug: space.type_slug,
            city: space.city,
            area: space.area,
        })
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::space_types)]
pub struct SpaceType {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl TryFrom<SpaceType> for DomainSpaceType {
    type Error = TypeConstraintError;

    fn try_from(space_type: SpaceType) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SpaceTypeId::new(space_type.id)?,
            name: space_type.name,
            slug: space_type.slug,
        })
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::locations)]
pub struct Location {
    pub id: i32,
    pub city: String,
    pub area: String,
}

impl TryFrom<Location> for DomainLocation {
    type Error = TypeConstraintError;

    fn try_from(location: Location) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LocationId::new(location.id)?,
            city: location.city,
            area: location.area,
        })
    }
}
