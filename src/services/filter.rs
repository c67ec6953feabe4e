use log::error;

use crate::domain::pricing;
use crate::dto::filter::{AppliedFilters, FilteredSpace, SpaceTypeDto};
use crate::forms::filter::{FilterSpacesPayload, LocationFilter};
use crate::repository::{AvailabilityReader, SpaceListQuery, SpaceReader};
use crate::services::availability::check_slot;

use super::{ServiceError, ServiceResult};

/// Core business logic for the space filter endpoint.
///
/// Fetches spaces matching the static filters in name order. When a full
/// slot was requested, each candidate is checked for availability and
/// priced; unavailable spaces are dropped. Without a slot every match is
/// returned with null annotations.
pub fn filter_spaces<R>(
    payload: FilterSpacesPayload,
    repo: &R,
) -> ServiceResult<(Vec<FilteredSpace>, AppliedFilters)>
where
    R: SpaceReader + AvailabilityReader,
{
    let mut query = SpaceListQuery::default().min_capacity(payload.people.get());
    if let Some(slug) = &payload.space_type {
        query = query.type_slug(slug.clone());
    }
    match &payload.location {
        Some(LocationFilter::Id(id)) => query = query.location_id(*id),
        Some(LocationFilter::Term(term)) => query = query.location_term(term.clone()),
        None => {}
    }

    let spaces = repo.list_spaces(query).map_err(|e| {
        error!("Failed to list spaces: {e}");
        ServiceError::from(e)
    })?;

    let slot = payload.slot();
    let mut results = Vec::with_capacity(spaces.len());
    for space in spaces {
        match &slot {
            Some(slot) => {
                if !check_slot(repo, space.id, slot)? {
                    continue;
                }
                let breakdown =
                    pricing::quote(space.hourly_rate, &space.type_slug, slot.start, slot.end);
                results.push(FilteredSpace::with_pricing(space, breakdown));
            }
            None => results.push(FilteredSpace::without_slot(space)),
        }
    }

    let applied = AppliedFilters::from(&payload);
    Ok((results, applied))
}

/// Space types for the filter dropdown, ordered by name.
pub fn list_space_types<R>(repo: &R) -> ServiceResult<Vec<SpaceTypeDto>>
where
    R: SpaceReader,
{
    match repo.list_space_types() {
        Ok(types) => Ok(types.into_iter().map(Into::into).collect()),
        Err(e) => {
            error!("Failed to list space types: {e}");
            Err(ServiceError::from(e))
        }
    }
}
