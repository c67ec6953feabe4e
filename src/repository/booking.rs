use diesel::prelude::*;

use crate::domain::availability::{self, Slot};
use crate::domain::booking::NewBooking;
use crate::domain::types::BookingId;
use crate::models::booking::NewBooking as DbNewBooking;
use crate::repository::availability::{load_booked_intervals, load_windows};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BookingWriter, DieselRepository};

impl BookingWriter for DieselRepository {
    fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<BookingId> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;

        let slot = Slot::new(booking.date, booking.start_time, booking.end_time)?;

        // An immediate transaction takes the write lock up front, so the
        // re-check below observes every committed booking and no other
        // writer can slip in between the check and the insert.
        conn.immediate_transaction(|conn| {
            let windows = load_windows(conn, booking.space_id, booking.date)?;
            if !availability::is_structurally_open(&windows, &slot) {
                return Err(RepositoryError::SlotConflict);
            }

            let booked = load_booked_intervals(conn, booking.space_id, booking.date)?;
            if availability::has_conflict(&booked, &slot) {
                return Err(RepositoryError::SlotConflict);
            }

            let row = DbNewBooking::from(booking);
            let id = diesel::insert_into(bookings::table)
                .values(&row)
                .returning(bookings::id)
                .get_result::<i32>(conn)?;

            Ok(BookingId::new(id)?)
        })
    }
}
