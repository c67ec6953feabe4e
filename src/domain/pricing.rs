//! Deterministic pricing calculation for a booking slot.
//!
//! Price = base (hourly rate x duration) x category multiplier x tiered
//! duration multiplier, rounded to two decimals at every stage. The functions
//! here are pure; malformed time strings are rejected by the forms layer
//! before this module is reached.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{HourlyRate, SpaceCategory};

/// Full price breakdown for a booking slot. Embedded in booking
/// confirmations and filter annotations, never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    pub category_multiplier: f64,
    pub duration_multiplier: f64,
    pub base_price: f64,
    pub total_price: f64,
}

impl PricingBreakdown {
    /// Neutral breakdown produced when the slot has no positive duration.
    pub const fn zero() -> Self {
        Self {
            duration_hours: 0.0,
            category_multiplier: 1.0,
            duration_multiplier: 1.0,
            base_price: 0.0,
            total_price: 0.0,
        }
    }
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Duration between two times in hours, rounded to two decimals.
/// Returns 0.0 when `end` is not after `start`.
pub fn duration_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    if end <= start {
        return 0.0;
    }
    let minutes = (end - start).num_minutes() as f64;
    round2(minutes / 60.0)
}

/// Category pricing factor for a slug; unrecognised slugs price neutrally.
pub fn category_multiplier(type_slug: &str) -> f64 {
    SpaceCategory::from_slug(type_slug)
        .map(SpaceCategory::multiplier)
        .unwrap_or(1.0)
}

/// Tiered factor applied as the booking gets longer. Boundaries are
/// inclusive on the lower tier.
pub fn duration_multiplier(duration_hours: f64) -> f64 {
    if duration_hours <= 2.0 {
        1.0
    } else if duration_hours <= 4.0 {
        1.1
    } else if duration_hours <= 6.0 {
        1.2
    } else {
        1.35
    }
}

/// Compute the full breakdown for a rate, category and time range.
pub fn quote(
    hourly_rate: HourlyRate,
    type_slug: &str,
    start: NaiveTime,
    end: NaiveTime,
) -> PricingBreakdown {
    let duration = duration_hours(start, end);
    if duration <= 0.0 {
        return PricingBreakdown::zero();
    }

    let base_price = round2(hourly_rate.get() * duration);
    let category_multiplier = category_multiplier(type_slug);
    let duration_multiplier = duration_multiplier(duration);
    let total_price = round2(base_price * category_multiplier * duration_multiplier);

    PricingBreakdown {
        duration_hours: duration,
        category_multiplier,
        duration_multiplier,
        base_price,
        total_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn rate(value: f64) -> HourlyRate {
        HourlyRate::new(value).unwrap()
    }

    #[test]
    fn computes_duration_in_hours() {
        assert_eq!(duration_hours(t(10, 0), t(12, 0)), 2.0);
        assert_eq!(duration_hours(t(9, 0), t(9, 45)), 0.75);
        assert_eq!(duration_hours(t(10, 0), t(10, 20)), 0.33);
    }

    #[test]
    fn zero_duration_when_end_not_after_start() {
        assert_eq!(duration_hours(t(12, 0), t(12, 0)), 0.0);
        assert_eq!(duration_hours(t(12, 0), t(10, 0)), 0.0);
        assert_eq!(quote(rate(500.0), "meeting-room", t(12, 0), t(10, 0)), PricingBreakdown::zero());
    }

    #[test]
    fn duration_multiplier_tier_boundaries() {
        assert_eq!(duration_multiplier(2.0), 1.0);
        assert_eq!(duration_multiplier(2.01), 1.1);
        assert_eq!(duration_multiplier(4.0), 1.1);
        assert_eq!(duration_multiplier(4.01), 1.2);
        assert_eq!(duration_multiplier(6.0), 1.2);
        assert_eq!(duration_multiplier(6.01), 1.35);
    }

    #[test]
    fn unknown_category_prices_neutrally() {
        assert_eq!(category_multiplier("warehouse"), 1.0);
        assert_eq!(category_multiplier(""), 1.0);
    }

    #[test]
    fn known_category_multipliers() {
        assert_eq!(category_multiplier("meeting-room"), 1.0);
        assert_eq!(category_multiplier("day-office"), 1.05);
        assert_eq!(category_multiplier("co-working"), 0.9);
        assert_eq!(category_multiplier("private"), 1.2);
        assert_eq!(category_multiplier("custom"), 1.3);
    }

    #[test]
    fn quotes_two_hour_meeting_room() {
        let breakdown = quote(rate(500.0), "meeting-room", t(10, 0), t(12, 0));
        assert_eq!(breakdown.duration_hours, 2.0);
        assert_eq!(breakdown.category_multiplier, 1.0);
        assert_eq!(breakdown.duration_multiplier, 1.0);
        assert_eq!(breakdown.base_price, 1000.0);
        assert_eq!(breakdown.total_price, 1000.0);
    }

    #[test]
    fn quotes_with_both_multipliers() {
        // 5h private office at 200/h: base 1000, x1.2 category, x1.2 duration.
        let breakdown = quote(rate(200.0), "private", t(9, 0), t(14, 0));
        assert_eq!(breakdown.duration_hours, 5.0);
        assert_eq!(breakdown.base_price, 1000.0);
        assert_eq!(breakdown.category_multiplier, 1.2);
        assert_eq!(breakdown.duration_multiplier, 1.2);
        assert_eq!(breakdown.total_price, 1440.0);
    }

    #[test]
    fn rounds_at_each_stage() {
        // 1h20m co-working at 99.99/h: base = round(99.99 * 1.33) = 132.99,
        // total = round(132.99 * 0.9) = 119.69.
        let breakdown = quote(rate(99.99), "co-working", t(10, 0), t(11, 20));
        assert_eq!(breakdown.duration_hours, 1.33);
        assert_eq!(breakdown.base_price, 132.99);
        assert_eq!(breakdown.total_price, 119.69);
    }

    #[test]
    fn zero_rate_yields_zero_price() {
        let breakdown = quote(rate(0.0), "meeting-room", t(10, 0), t(12, 0));
        assert_eq!(breakdown.base_price, 0.0);
        assert_eq!(breakdown.total_price, 0.0);
    }

    #[test]
    fn serializes_duration_under_wire_name() {
        let value =
            serde_json::to_value(quote(rate(500.0), "meeting-room", t(10, 0), t(12, 0))).unwrap();
        assert_eq!(value["duration"], 2.0);
        assert!(value.get("duration_hours").is_none());
    }
}
