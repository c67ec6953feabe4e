use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::space::AvailabilityWindow as DomainAvailabilityWindow;
use crate::domain::types::{SpaceId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::space_availability)]
pub struct AvailabilityWindow {
    pub id: i32,
    pub space_id: i32,
    pub available_date: NaiveDate,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl TryFrom<AvailabilityWindow> for DomainAvailabilityWindow {
    type Error = TypeConstraintError;

    fn try_from(window: AvailabilityWindow) -> Result<Self, Self::Error> {
        Ok(Self {
            space_id: SpaceId::new(window.space_id)?,
            date: window.available_date,
            open_time: window.open_time,
            close_time: window.close_time,
        })
    }
}
