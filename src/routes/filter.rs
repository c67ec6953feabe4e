use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::dto::filter::{AppliedFilters, FilteredSpace, SpaceTypeDto};
use crate::dto::locations::LocationSuggestion;
use crate::forms::filter::{FilterSpacesForm, FilterSpacesPayload, SuggestLocationsQuery};
use crate::repository::DieselRepository;
use crate::routes::{ApiFailure, error_response};
use crate::services::filter::{filter_spaces as filter_spaces_service, list_space_types as list_space_types_service};
use crate::services::locations::suggest_locations as suggest_locations_service;

#[derive(Serialize)]
struct FilterResponse {
    success: bool,
    spaces: Vec<FilteredSpace>,
    applied_filters: AppliedFilters,
}

#[derive(Serialize)]
struct SuggestResponse {
    success: bool,
    suggestions: Vec<LocationSuggestion>,
}

#[derive(Serialize)]
struct SpaceTypesResponse {
    success: bool,
    space_types: Vec<SpaceTypeDto>,
}

#[post("/api/filter")]
pub async fn filter_spaces(
    form: web::Form<FilterSpacesForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: FilterSpacesPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        // Filter validation failures answer 200 with a message, matching
        // what the search panel expects.
        Err(e) => return HttpResponse::Ok().json(ApiFailure::new(e.to_string(), None)),
    };

    match filter_spaces_service(payload, repo.get_ref()) {
        Ok((spaces, applied_filters)) => HttpResponse::Ok().json(FilterResponse {
            success: true,
            spaces,
            applied_filters,
        }),
        Err(err) => error_response(err),
    }
}

#[get("/api/locations/suggest")]
pub async fn suggest_locations(
    params: web::Query<SuggestLocationsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match suggest_locations_service(&params.term, repo.get_ref()) {
        Ok(suggestions) => HttpResponse::Ok().json(SuggestResponse {
            success: true,
            suggestions,
        }),
        Err(err) => error_response(err),
    }
}

#[get("/api/space-types")]
pub async fn list_space_types(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_space_types_service(repo.get_ref()) {
        Ok(space_types) => HttpResponse::Ok().json(SpaceTypesResponse {
            success: true,
            space_types,
        }),
        Err(err) => error_response(err),
    }
}
