use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Capacity, HourlyRate, LocationId, SpaceId, SpaceName, SpaceTypeId};

/// A bookable space together with its type and location reference data.
/// Read-only within a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub name: SpaceName,
    pub capacity: Capacity,
    pub hourly_rate: HourlyRate,
    pub description: Option<String>,
    pub type_name: String,
    /// Category slug; slugs outside the closed pricing set are allowed and
    /// price at the neutral multiplier.
    pub type_slug: String,
    pub city: String,
    pub area: String,
}

impl Space {
    /// Human-readable "area, city" label used in confirmations and listings.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.area, self.city)
    }
}

/// A category of bookable space (reference data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceType {
    pub id: SpaceTypeId,
    pub name: String,
    pub slug: String,
}

/// A city/area pair (reference data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub city: String,
    pub area: String,
}

impl Location {
    /// "area, city" label shown in suggestion lists.
    pub fn label(&self) -> String {
        format!("{}, {}", self.area, self.city)
    }
}

/// An explicit serving window for a space on a date. Absence of any window
/// for a (space, date) pair means the day is unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub space_id: SpaceId,
    pub date: NaiveDate,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}
