use diesel::prelude::*;

use crate::domain::space::{Location, Space, SpaceType};
use crate::domain::types::SpaceId;
use crate::models::space::{
    Location as DbLocation, Space as DbSpace, SpaceType as DbSpaceType,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, LocationReader, SpaceListQuery, SpaceReader};

type SpaceSelection = (
    crate::schema::spaces::id,
    crate::schema::spaces::name,
    crate::schema::spaces::capacity,
    crate::schema::spaces::hourly_rate,
    crate::schema::spaces::description,
    crate::schema::space_types::name,
    crate::schema::space_types::slug,
    crate::schema::locations::city,
    crate::schema::locations::area,
);

fn space_selection() -> SpaceSelection {
    use crate::schema::{locations, space_types, spaces};
    (
        spaces::id,
        spaces::name,
        spaces::capacity,
        spaces::hourly_rate,
        spaces::description,
        space_types::name,
        space_types::slug,
        locations::city,
        locations::area,
    )
}

impl SpaceReader for DieselRepository {
    fn list_spaces(&self, query: SpaceListQuery) -> RepositoryResult<Vec<Space>> {
        use crate::schema::{locations, space_types, spaces};

        let mut conn = self.conn()?;

        let mut items = spaces::table
            .inner_join(space_types::table)
            .inner_join(locations::table)
            .select(space_selection())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(slug) = query.type_slug {
            items = items.filter(space_types::slug.eq(slug));
        }

        if let Some(capacity) = query.min_capacity {
            items = items.filter(spaces::capacity.ge(capacity));
        }

        if let Some(location_id) = query.location_id {
            items = items.filter(spaces::location_id.eq(location_id.get()));
        } else if let Some(term) = query.location_term {
            let like = format!("%{term}%");
            items = items.filter(locations::city.like(like.clone()).or(locations::area.like(like)));
        }

        items
            .order(spaces::name.asc())
            .load::<DbSpace>(&mut conn)?
            .into_iter()
            .map(|row| row.try_into().map_err(Into::into))
            .collect()
    }

    fn get_space_by_id(&self, id: SpaceId) -> RepositoryResult<Option<Space>> {
        use crate::schema::{locations, space_types, spaces};

        let mut conn = self.conn()?;

        let space = spaces::table
            .inner_join(space_types::table)
            .inner_join(locations::table)
            .filter(spaces::id.eq(id.get()))
            .select(space_selection())
            .first::<DbSpace>(&mut conn)
            .optional()?;

        space.map(|row| row.try_into().map_err(Into::into)).transpose()
    }

    fn list_space_types(&self) -> RepositoryResult<Vec<SpaceType>> {
        use crate::schema::space_types;

        let mut conn = self.conn()?;

        space_types::table
            .order(space_types::name.asc())
            .load::<DbSpaceType>(&mut conn)?
            .into_iter()
            .map(|row| row.try_into().map_err(Into::into))
            .collect()
    }
}

impl LocationReader for DieselRepository {
    fn suggest_locations(&self, term: &str, limit: i64) -> RepositoryResult<Vec<Location>> {
        use crate::schema::locations;

        let mut conn = self.conn()?;

        let mut items = locations::table.into_boxed::<diesel::sqlite::Sqlite>();

        let term = term.trim();
        if !term.is_empty() {
            let like = format!("%{term}%");
            items = items.filter(locations::city.like(like.clone()).or(locations::area.like(like)));
        }

        items
            .order((locations::city.asc(), locations::area.asc()))
            .limit(limit)
            .load::<DbLocation>(&mut conn)?
            .into_iter()
            .map(|row| row.try_into().map_err(Into::into))
            .collect()
    }
}
