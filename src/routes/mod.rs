use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod booking;
pub mod filter;

/// Failure envelope shared by every endpoint. `debug` carries storage detail
/// in debug builds only; production responses stay generic.
#[derive(Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl ApiFailure {
    fn new(message: String, debug: Option<String>) -> Self {
        Self {
            success: false,
            message,
            debug,
        }
    }
}

/// Map a service error to its HTTP status and failure envelope.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let message = err.to_string();
    match err {
        ServiceError::Validation(_) => {
            HttpResponse::UnprocessableEntity().json(ApiFailure::new(message, None))
        }
        ServiceError::SlotUnavailable => {
            HttpResponse::Conflict().json(ApiFailure::new(message, None))
        }
        ServiceError::Persistence(detail) => {
            let debug = cfg!(debug_assertions).then_some(detail);
            HttpResponse::InternalServerError().json(ApiFailure::new(message, debug))
        }
        ServiceError::Pricing | ServiceError::Internal => HttpResponse::InternalServerError()
            .json(ApiFailure::new(
                "Unable to complete your booking. Please try again.".to_string(),
                None,
            )),
    }
}
