//! Pure slot availability decisions.
//!
//! A space is bookable for a slot when the date is structurally open (its
//! configured availability windows permit the range, or no windows are
//! configured for that date at all) and no existing booking overlaps the
//! requested interval. The data is supplied by the repository; nothing here
//! touches the database.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::space::AvailabilityWindow;
use crate::domain::types::TypeConstraintError;

/// A requested occupancy interval: date plus `[start, end)` time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Builds a slot, requiring the end time to be after the start time.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self, TypeConstraintError> {
        if end <= start {
            return Err(TypeConstraintError::InvalidValue(
                "end time must be later than the start time".to_string(),
            ));
        }
        Ok(Self { date, start, end })
    }
}

/// An already-booked `[start, end)` interval on some space and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Whether the configured windows permit the slot.
///
/// No windows for the date means the day is unrestricted. When windows
/// exist, at least one must fully contain the slot
/// (`open_time <= start && close_time >= end`).
pub fn is_structurally_open(windows: &[AvailabilityWindow], slot: &Slot) -> bool {
    if windows.is_empty() {
        return true;
    }
    windows
        .iter()
        .any(|w| w.open_time <= slot.start && w.close_time >= slot.end)
}

/// Half-open interval intersection: touching endpoints do not conflict.
pub fn has_conflict(booked: &[BookedInterval], slot: &Slot) -> bool {
    booked
        .iter()
        .any(|b| slot.start < b.end && slot.end > b.start)
}
