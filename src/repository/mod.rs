use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::availability::BookedInterval;
use crate::domain::booking::NewBooking;
use crate::domain::space::{AvailabilityWindow, Location, Space, SpaceType};
use crate::domain::types::{BookingId, LocationId, SpaceId};
use crate::repository::errors::RepositoryResult;

pub mod availability;
pub mod booking;
pub mod errors;
pub mod space;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Static filters applied when listing spaces. Results are always ordered
/// by space name ascending.
#[derive(Debug, Clone, Default)]
pub struct SpaceListQuery {
    /// Restrict to a space type slug.
    pub type_slug: Option<String>,
    /// Minimum capacity required.
    pub min_capacity: Option<i32>,
    /// Restrict to a location by id. Takes precedence over the term.
    pub location_id: Option<LocationId>,
    /// Free-text match against city or area; ignored when an id is set.
    pub location_term: Option<String>,
}

impl SpaceListQuery {
    pub fn type_slug(mut self, slug: impl Into<String>) -> Self {
        self.type_slug = Some(slug.into());
        self
    }
    pub fn min_capacity(mut self, capacity: i32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }
    pub fn location_id(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }
    pub fn location_term(mut self, term: impl Into<String>) -> Self {
        self.location_term = Some(term.into());
        self
    }
}

/// Read-only operations for spaces and space types.
pub trait SpaceReader {
    /// List spaces matching the static filters, ordered by name ascending.
    fn list_spaces(&self, query: SpaceListQuery) -> RepositoryResult<Vec<Space>>;
    /// Retrieve a space with its type and location by identifier.
    fn get_space_by_id(&self, id: SpaceId) -> RepositoryResult<Option<Space>>;
    /// List all space types ordered alphabetically.
    fn list_space_types(&self) -> RepositoryResult<Vec<SpaceType>>;
}

/// Read-only operations for location reference data.
pub trait LocationReader {
    /// Locations whose city or area matches the term, ordered by city then
    /// area, capped at `limit`. An empty term returns the default page.
    fn suggest_locations(&self, term: &str, limit: i64) -> RepositoryResult<Vec<Location>>;
}

/// Read-only operations backing the availability decision.
pub trait AvailabilityReader {
    /// Configured serving windows for a space on a date.
    fn list_windows(
        &self,
        space_id: SpaceId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<AvailabilityWindow>>;
    /// Intervals already booked for a space on a date.
    fn list_booked_intervals(
        &self,
        space_id: SpaceId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<BookedInterval>>;
}

/// Write operations for bookings.
pub trait BookingWriter {
    /// Persist a booking and return its assigned identifier.
    ///
    /// The slot is re-checked against windows and existing bookings inside
    /// the same write transaction as the insert; a conflict observed there
    /// yields [`errors::RepositoryError::SlotConflict`].
    fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<BookingId>;
}
