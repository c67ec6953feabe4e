use log::error;

use crate::domain::availability::{self, Slot};
use crate::domain::types::SpaceId;
use crate::repository::{AvailabilityReader, SpaceReader};

use super::{ServiceError, ServiceResult};

/// Decide whether a space can take the requested slot.
///
/// Fails closed when the space does not exist. The date is structurally open
/// when no windows are configured for it, or when at least one window fully
/// contains the slot. Given openness, any overlapping booking denies the
/// slot. Read-only; the authoritative re-check happens again inside the
/// booking write transaction.
pub fn check_slot<R>(repo: &R, space_id: SpaceId, slot: &Slot) -> ServiceResult<bool>
where
    R: SpaceReader + AvailabilityReader,
{
    let space = repo.get_space_by_id(space_id).map_err(|e| {
        error!("Failed to load space {space_id}: {e}");
        ServiceError::from(e)
    })?;
    if space.is_none() {
        return Ok(false);
    }

    let windows = repo.list_windows(space_id, slot.date).map_err(|e| {
        error!("Failed to list availability windows for space {space_id}: {e}");
        ServiceError::from(e)
    })?;
    if !availability::is_structurally_open(&windows, slot) {
        return Ok(false);
    }

    let booked = repo.list_booked_intervals(space_id, slot.date).map_err(|e| {
        error!("Failed to list bookings for space {space_id}: {e}");
        ServiceError::from(e)
    })?;

    Ok(!availability::has_conflict(&booked, slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::NewBooking;
    use crate::domain::space::{AvailabilityWindow, Space};
    use crate::domain::types::{
        Capacity, CustomerEmail, CustomerName, HourlyRate, PeopleCount, SpaceName,
    };
    use crate::repository::test::TestRepository;
    use chrono::{NaiveDate, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn space(id: i32) -> Space {
        Space {
            id: SpaceId::new(id).unwrap(),
            name: SpaceName::new(format!("Space {id}")).unwrap(),
            capacity: Capacity::new(10).unwrap(),
            hourly_rate: HourlyRate::new(500.0).unwrap(),
            description: None,
            type_name: "Meeting Room".to_string(),
            type_slug: "meeting-room".to_string(),
            city: "Leeds".to_string(),
            area: "Docklands".to_string(),
        }
    }

    fn window(space_id: i32, open: (u32, u32), close: (u32, u32)) -> AvailabilityWindow {
        AvailabilityWindow {
            space_id: SpaceId::new(space_id).unwrap(),
            date: date(),
            open_time: t(open.0, open.1),
            close_time: t(close.0, close.1),
        }
    }

    fn booking(space_id: i32, start: (u32, u32), end: (u32, u32)) -> NewBooking {
        NewBooking {
            space_id: SpaceId::new(space_id).unwrap(),
            date: date(),
            start_time: t(start.0, start.1),
            end_time: t(end.0, end.1),
            people_count: PeopleCount::new(2).unwrap(),
            customer_name: CustomerName::new("Test").unwrap(),
            customer_email: CustomerEmail::new("test@example.com").unwrap(),
            customer_phone: None,
            notes: None,
            total_price: 100.0,
        }
    }

    fn slot(start: (u32, u32), end: (u32, u32)) -> Slot {
        Slot::new(date(), t(start.0, start.1), t(end.0, end.1)).unwrap()
    }

    #[test]
    fn unknown_space_fails_closed() {
        let repo = TestRepository::new(vec![], vec![]);
        assert!(!check_slot(&repo, SpaceId::new(99).unwrap(), &slot((10, 0), (11, 0))).unwrap());
    }

    #[test]
    fn no_windows_and_no_bookings_is_available() {
        let repo = TestRepository::new(vec![space(1)], vec![]);
        assert!(check_slot(&repo, SpaceId::new(1).unwrap(), &slot((10, 0), (11, 0))).unwrap());
    }

    #[test]
    fn window_restricts_the_day() {
        let repo = TestRepository::new(vec![space(1)], vec![window(1, (9, 0), (12, 0))]);
        let id = SpaceId::new(1).unwrap();
        assert!(check_slot(&repo, id, &slot((10, 0), (11, 0))).unwrap());
        assert!(!check_slot(&repo, id, &slot((11, 0), (13, 0))).unwrap());
    }

    #[test]
    fn overlapping_booking_denies_the_slot() {
        let repo = TestRepository::new(vec![space(1)], vec![])
            .with_bookings(vec![booking(1, (10, 0), (11, 0))]);
        let id = SpaceId::new(1).unwrap();
        assert!(!check_slot(&repo, id, &slot((10, 30), (11, 30))).unwrap());
        assert!(check_slot(&repo, id, &slot((11, 0), (12, 0))).unwrap());
    }
}
