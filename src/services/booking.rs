use log::error;

use crate::domain::availability::Slot;
use crate::domain::booking::NewBooking;
use crate::domain::pricing;
use crate::dto::booking::BookingConfirmation;
use crate::forms::booking::CreateBookingPayload;
use crate::repository::errors::RepositoryError;
use crate::repository::{AvailabilityReader, BookingWriter, SpaceReader};
use crate::services::availability::check_slot;

use super::{ServiceError, ServiceResult};

/// Create a booking: resolve the space, confirm the slot, price it, persist
/// one row and build the confirmation. Any failure aborts the whole
/// operation; no partial booking is ever visible to callers.
pub fn create_booking<R>(
    payload: CreateBookingPayload,
    repo: &R,
) -> ServiceResult<BookingConfirmation>
where
    R: SpaceReader + AvailabilityReader + BookingWriter,
{
    let space = match repo.get_space_by_id(payload.space_id) {
        Ok(Some(space)) => space,
        Ok(None) => {
            return Err(ServiceError::Validation(
                "The selected space is no longer available.".to_string(),
            ));
        }
        Err(e) => {
            error!("Failed to load space {}: {e}", payload.space_id);
            return Err(ServiceError::from(e));
        }
    };

    if payload.people.get() > space.capacity.get() {
        return Err(ServiceError::Validation(
            "This space cannot accommodate your group size.".to_string(),
        ));
    }

    let slot = Slot::new(payload.date, payload.start_time, payload.end_time)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    if !check_slot(repo, payload.space_id, &slot)? {
        return Err(ServiceError::SlotUnavailable);
    }

    let breakdown = pricing::quote(space.hourly_rate, &space.type_slug, slot.start, slot.end);
    if breakdown.total_price <= 0.0 {
        error!(
            "Computed non-positive total {} for space {}",
            breakdown.total_price, payload.space_id
        );
        return Err(ServiceError::Pricing);
    }

    let new_booking = NewBooking {
        space_id: payload.space_id,
        date: payload.date,
        start_time: payload.start_time,
        end_time: payload.end_time,
        people_count: payload.people,
        customer_name: payload.customer_name.clone(),
        customer_email: payload.customer_email.clone(),
        customer_phone: payload.customer_phone.clone(),
        notes: payload.notes.clone(),
        total_price: breakdown.total_price,
    };

    let id = match repo.create_booking(&new_booking) {
        Ok(id) => id,
        Err(RepositoryError::SlotConflict) => return Err(ServiceError::SlotUnavailable),
        Err(e) => {
            error!("Failed to persist booking for space {}: {e}", payload.space_id);
            return Err(ServiceError::from(e));
        }
    };

    Ok(BookingConfirmation::new(id, &space, &payload, breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::space::{AvailabilityWindow, Space};
    use crate::domain::types::{Capacity, HourlyRate, SpaceId, SpaceName};
    use crate::forms::booking::CreateBookingForm;
    use crate::repository::test::TestRepository;
    use chrono::{Duration, Local, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn tomorrow() -> String {
        (Local::now().date_naive() + Duration::days(1))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn meeting_room() -> Space {
        Space {
            id: SpaceId::new(1).unwrap(),
            name: SpaceName::new("Harbour Suite").unwrap(),
            capacity: Capacity::new(10).unwrap(),
            hourly_rate: HourlyRate::new(500.0).unwrap(),
            description: None,
            type_name: "Meeting Room".to_string(),
            type_slug: "meeting-room".to_string(),
            city: "Leeds".to_string(),
            area: "Docklands".to_string(),
        }
    }

    fn payload(people: i32) -> CreateBookingPayload {
        CreateBookingForm {
            space_id: 1,
            date: tomorrow(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            people,
            customer_name: "Jordan Reid".to_string(),
            customer_email: "jordan@example.com".to_string(),
            customer_phone: String::new(),
            notes: String::new(),
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn books_a_free_slot_end_to_end() {
        let repo = TestRepository::new(vec![meeting_room()], vec![]);

        let confirmation = create_booking(payload(5), &repo).unwrap();
        assert_eq!(confirmation.id, 1);
        assert_eq!(confirmation.reference, "BK-000001");
        assert_eq!(confirmation.space_name, "Harbour Suite");
        assert_eq!(confirmation.location, "Docklands, Leeds");
        assert_eq!(confirmation.duration_hours, 2.0);
        assert_eq!(confirmation.total_price, 1000.0);
        assert_eq!(confirmation.pricing.base_price, 1000.0);
        assert_eq!(confirmation.pricing.category_multiplier, 1.0);
        assert_eq!(confirmation.pricing.duration_multiplier, 1.0);
        assert_eq!(repo.booking_count(), 1);
    }

    #[test]
    fn rejects_group_larger_than_capacity() {
        let repo = TestRepository::new(vec![meeting_room()], vec![]);

        let err = create_booking(payload(11), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("This space cannot accommodate your group size.".to_string())
        );
        assert_eq!(repo.booking_count(), 0);
    }

    #[test]
    fn rejects_unknown_space() {
        let repo = TestRepository::new(vec![], vec![]);

        let err = create_booking(payload(2), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("The selected space is no longer available.".to_string())
        );
    }

    #[test]
    fn second_overlapping_booking_is_refused() {
        let repo = TestRepository::new(vec![meeting_room()], vec![]);

        create_booking(payload(2), &repo).unwrap();
        let err = create_booking(payload(2), &repo).unwrap_err();
        assert_eq!(err, ServiceError::SlotUnavailable);
        assert_eq!(repo.booking_count(), 1);
    }

    #[test]
    fn structurally_closed_day_is_refused() {
        let date = Local::now().date_naive() + Duration::days(1);
        let repo = TestRepository::new(
            vec![meeting_room()],
            vec![AvailabilityWindow {
                space_id: SpaceId::new(1).unwrap(),
                date,
                open_time: t(14, 0),
                close_time: t(18, 0),
            }],
        );

        let err = create_booking(payload(2), &repo).unwrap_err();
        assert_eq!(err, ServiceError::SlotUnavailable);
    }
}
