use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{BookingId, CustomerEmail, CustomerName, PeopleCount, SpaceId};

/// A persisted booking. Created exactly once per successful request and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub space_id: SpaceId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub people_count: PeopleCount,
    pub customer_name: CustomerName,
    pub customer_email: CustomerEmail,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub total_price: f64,
}

/// Information required to create a new [`Booking`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    pub space_id: SpaceId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub people_count: PeopleCount,
    pub customer_name: CustomerName,
    pub customer_email: CustomerEmail,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub total_price: f64,
}

/// Human-readable reference derived from the persisted numeric id.
pub fn booking_reference(id: BookingId) -> String {
    format!("BK-{:06}", id.get())
}
