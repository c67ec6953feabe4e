use serde::Serialize;

use crate::domain::booking::booking_reference;
use crate::domain::pricing::PricingBreakdown;
use crate::domain::space::Space;
use crate::domain::types::BookingId;
use crate::forms::booking::CreateBookingPayload;

/// Confirmation returned after a booking has been persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingConfirmation {
    pub id: i32,
    pub reference: String,
    pub space_id: i32,
    pub space_name: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
    pub people: i32,
    pub total_price: f64,
    pub pricing: PricingBreakdown,
}

impl BookingConfirmation {
    pub fn new(
        id: BookingId,
        space: &Space,
        payload: &CreateBookingPayload,
        pricing: PricingBreakdown,
    ) -> Self {
        Self {
            id: id.get(),
            reference: booking_reference(id),
            space_id: payload.space_id.get(),
            space_name: space.name.as_str().to_string(),
            location: space.location_label(),
            date: payload.date.format("%Y-%m-%d").to_string(),
            start_time: payload.start_time.format("%H:%M").to_string(),
            end_time: payload.end_time.format("%H:%M").to_string(),
            duration_hours: pricing.duration_hours,
            people: payload.people.get(),
            total_price: pricing.total_price,
            pricing,
        }
    }
}
