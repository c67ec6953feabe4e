use actix_web::{HttpResponse, Responder, post, web};
use serde::Serialize;

use crate::dto::booking::BookingConfirmation;
use crate::forms::booking::{CreateBookingForm, CreateBookingPayload};
use crate::repository::DieselRepository;
use crate::routes::{ApiFailure, error_response};
use crate::services::booking::create_booking as create_booking_service;

#[derive(Serialize)]
struct BookingResponse {
    success: bool,
    message: String,
    booking: BookingConfirmation,
}

#[post("/api/booking")]
pub async fn create_booking(
    form: web::Form<CreateBookingForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: CreateBookingPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::UnprocessableEntity().json(ApiFailure::new(e.to_string(), None));
        }
    };

    match create_booking_service(payload, repo.get_ref()) {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse {
            success: true,
            message: "Booking confirmed.".to_string(),
            booking,
        }),
        Err(err) => error_response(err),
    }
}
