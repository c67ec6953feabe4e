use chrono::{Local, NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::availability::Slot;
use crate::domain::types::{LocationId, PeopleCount};

/// Raw filter form as posted by the search panel. Empty strings are treated
/// as absent, matching HTML form submission behaviour.
#[derive(Debug, Deserialize)]
pub struct FilterSpacesForm {
    #[serde(default)]
    pub space_type: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub people: Option<i32>,
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub location_term: String,
}

/// Location filter resolved from the form; an explicit id wins over a
/// free-text term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    Id(LocationId),
    Term(String),
}

/// Validated filter parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpacesPayload {
    pub space_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub people: PeopleCount,
    pub location: Option<LocationFilter>,
}

impl FilterSpacesPayload {
    /// The requested slot, present only when date and both times were given.
    pub fn slot(&self) -> Option<Slot> {
        match (self.date, self.start_time, self.end_time) {
            (Some(date), Some(start), Some(end)) => Slot::new(date, start, end).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterSpacesFormError {
    #[error("Please choose a valid date.")]
    InvalidDate,
    #[error("Please enter valid time values.")]
    InvalidTime,
    #[error("Time until must be later than time from.")]
    InvalidTimeRange,
}

fn parse_time(value: &str) -> Result<NaiveTime, FilterSpacesFormError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| FilterSpacesFormError::InvalidTime)
}

impl TryFrom<FilterSpacesForm> for FilterSpacesPayload {
    type Error = FilterSpacesFormError;

    fn try_from(form: FilterSpacesForm) -> Result<Self, Self::Error> {
        let space_type = match form.space_type.trim() {
            "" => None,
            slug => Some(slug.to_string()),
        };

        let date = match form.date.trim() {
            "" => None,
            value => {
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| FilterSpacesFormError::InvalidDate)?;
                if date < Local::now().date_naive() {
                    return Err(FilterSpacesFormError::InvalidDate);
                }
                Some(date)
            }
        };

        let start_time = match form.start_time.trim() {
            "" => None,
            value => Some(parse_time(value)?),
        };
        let end_time = match form.end_time.trim() {
            "" => None,
            value => Some(parse_time(value)?),
        };

        if let (Some(start), Some(end)) = (start_time, end_time)
            && start >= end
        {
            return Err(FilterSpacesFormError::InvalidTimeRange);
        }

        let location = match form.location_id.and_then(|id| LocationId::new(id).ok()) {
            Some(id) => Some(LocationFilter::Id(id)),
            None => match form.location_term.trim() {
                "" => None,
                term => Some(LocationFilter::Term(term.to_string())),
            },
        };

        Ok(Self {
            space_type,
            date,
            start_time,
            end_time,
            people: PeopleCount::floor_one(form.people.unwrap_or(1)),
            location,
        })
    }
}

/// Query parameters for the location suggestion endpoint.
#[derive(Debug, Deserialize)]
pub struct SuggestLocationsQuery {
    #[serde(default)]
    pub term: String,
}
