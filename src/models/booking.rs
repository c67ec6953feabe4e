use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::booking::NewBooking as DomainNewBooking;

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub space_id: i32,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub people_count: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub total_price: f64,
}

impl From<&DomainNewBooking> for NewBooking {
    fn from(booking: &DomainNewBooking) -> Self {
        Self {
            space_id: booking.space_id.get(),
            booking_date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            people_count: booking.people_count.get(),
            customer_name: booking.customer_name.as_str().to_string(),
            customer_email: booking.customer_email.as_str().to_string(),
            customer_phone: booking.customer_phone.clone(),
            notes: booking.notes.clone(),
            total_price: booking.total_price,
        }
    }
}
