use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::types::{CustomerEmail, CustomerName, PeopleCount, SpaceId};

/// Raw booking form as posted by the booking modal. Missing fields behave
/// like empty submissions so every problem can be reported at once.
#[derive(Debug, Deserialize)]
pub struct CreateBookingForm {
    #[serde(default)]
    pub space_id: i32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub people: i32,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Fully validated booking request. Capacity and slot checks still happen in
/// the service because they need the space record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingPayload {
    pub space_id: SpaceId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub people: PeopleCount,
    pub customer_name: CustomerName,
    pub customer_email: CustomerEmail,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
}

/// All field-level failures, collected rather than short-circuited.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", .messages.join(" "))]
pub struct CreateBookingFormError {
    pub messages: Vec<String>,
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl TryFrom<CreateBookingForm> for CreateBookingPayload {
    type Error = CreateBookingFormError;

    fn try_from(form: CreateBookingForm) -> Result<Self, Self::Error> {
        let mut messages = Vec::new();

        let space_id = SpaceId::new(form.space_id).ok();
        if space_id.is_none() {
            messages.push("Select a valid workspace.".to_string());
        }

        let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            messages.push("Choose a valid booking date.".to_string());
        }

        let start_time = NaiveTime::parse_from_str(form.start_time.trim(), "%H:%M").ok();
        if start_time.is_none() {
            messages.push("Enter a valid start time.".to_string());
        }

        let end_time = NaiveTime::parse_from_str(form.end_time.trim(), "%H:%M").ok();
        if end_time.is_none() {
            messages.push("Enter a valid end time.".to_string());
        }

        if let (Some(start), Some(end)) = (start_time, end_time)
            && start >= end
        {
            messages.push("End time must be later than the start time.".to_string());
        }

        let people = PeopleCount::new(form.people).ok();
        if people.is_none() {
            messages.push("Enter the number of people attending.".to_string());
        }

        let customer_name = CustomerName::new(form.customer_name).ok();
        if customer_name.is_none() {
            messages.push("Enter your name.".to_string());
        }

        let customer_email = CustomerEmail::new(form.customer_email).ok();
        if customer_email.is_none() {
            messages.push("Enter a valid email address.".to_string());
        }

        match (space_id, date, start_time, end_time, people, customer_name, customer_email) {
            (
                Some(space_id),
                Some(date),
                Some(start_time),
                Some(end_time),
                Some(people),
                Some(customer_name),
                Some(customer_email),
            ) if messages.is_empty() => Ok(Self {
                space_id,
                date,
                start_time,
                end_time,
                people,
                customer_name,
                customer_email,
                customer_phone: optional(form.customer_phone),
                notes: optional(form.notes),
            }),
            _ => Err(CreateBookingFormError { messages }),
        }
    }
}
