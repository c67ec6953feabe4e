use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::availability::BookedInterval;
use crate::domain::space::AvailabilityWindow;
use crate::domain::types::SpaceId;
use crate::models::availability::AvailabilityWindow as DbAvailabilityWindow;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AvailabilityReader, DieselRepository};

pub(crate) fn load_windows(
    conn: &mut SqliteConnection,
    space_id: SpaceId,
    date: NaiveDate,
) -> RepositoryResult<Vec<AvailabilityWindow>> {
    use crate::schema::space_availability;

    space_availability::table
        .filter(space_availability::space_id.eq(space_id.get()))
        .filter(space_availability::available_date.eq(date))
        .load::<DbAvailabilityWindow>(conn)?
        .into_iter()
        .map(|row| row.try_into().map_err(Into::into))
        .collect()
}

pub(crate) fn load_booked_intervals(
    conn: &mut SqliteConnection,
    space_id: SpaceId,
    date: NaiveDate,
) -> RepositoryResult<Vec<BookedInterval>> {
    use crate::schema::bookings;

    let intervals: Vec<(NaiveTime, NaiveTime)> = bookings::table
        .filter(bookings::space_id.eq(space_id.get()))
        .filter(bookings::booking_date.eq(date))
        .select((bookings::start_time, bookings::end_time))
        .load(conn)?;

    Ok(intervals
        .into_iter()
        .map(|(start, end)| BookedInterval { start, end })
        .collect())
}

impl AvailabilityReader for DieselRepository {
    fn list_windows(
        &self,
        space_id: SpaceId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<AvailabilityWindow>> {
        let mut conn = self.conn()?;
        load_windows(&mut conn, space_id, date)
    }

    fn list_booked_intervals(
        &self,
        space_id: SpaceId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<BookedInterval>> {
        let mut conn = self.conn()?;
        load_booked_intervals(&mut conn, space_id, date)
    }
}
