//! Availability Resolver
//!
//! Computes free rooms per date from the base room count, date-specific
//! overrides, and booked-room counts. Pure date math: network degradation
//! is handled by the caller, which feeds an empty override set or a `None`
//! occupancy when a fetch fails.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use shared::{Accommodation, DateOverride};

/// Calendar day classification
///
/// Drives day-coloring and selection gating. Precedence when several
/// conditions hold: FullyBooked, then ExtraRooms, then CustomPricing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    /// No rooms left; the date cannot be selected as check-in
    FullyBooked,
    /// Override adds rooms beyond the base count
    ExtraRooms,
    /// Override carries date-specific pricing
    CustomPricing,
    /// No override in effect
    Standard,
}

/// One precomputed calendar entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub available_rooms: u32,
}

/// Per-accommodation availability math
///
/// Built once per accommodation load from the base room count and the
/// fetched override set. Occupancy is supplied per call because it is
/// fetched fresh for each selected date, never cached across dates.
#[derive(Debug, Clone)]
pub struct AvailabilityResolver {
    base_rooms: u32,
    overrides: HashMap<NaiveDate, DateOverride>,
}

impl AvailabilityResolver {
    pub fn new(accommodation: &Accommodation, overrides: Vec<DateOverride>) -> Self {
        Self {
            base_rooms: accommodation.base_rooms,
            overrides: overrides.into_iter().map(|ov| (ov.date, ov)).collect(),
        }
    }

    /// The override in effect for a date, if any
    pub fn override_for(&self, date: NaiveDate) -> Option<&DateOverride> {
        self.overrides.get(&date)
    }

    /// Total sellable rooms for a date: base count plus the override delta.
    ///
    /// An `all_blocked` override withdraws the property entirely; a
    /// negative delta never takes the total below zero.
    pub fn total_rooms(&self, date: NaiveDate) -> u32 {
        match self.override_for(date) {
            Some(ov) if ov.all_blocked => 0,
            Some(ov) => {
                let total = i64::from(self.base_rooms) + i64::from(ov.additional_rooms);
                total.max(0) as u32
            }
            None => self.base_rooms,
        }
    }

    /// Free rooms for a date: `max(0, total - booked)`.
    ///
    /// A missing booked count means "not yet confirmed booked" and counts
    /// as zero, never as blocking.
    pub fn available_rooms(&self, date: NaiveDate, booked_rooms: Option<u32>) -> u32 {
        self.total_rooms(date)
            .saturating_sub(booked_rooms.unwrap_or(0))
    }

    pub fn is_fully_booked(&self, date: NaiveDate, booked_rooms: Option<u32>) -> bool {
        self.available_rooms(date, booked_rooms) == 0
    }

    /// Whether a date may be chosen as check-in.
    ///
    /// Dates before `min_date` (normally today) are always disabled
    /// regardless of availability.
    pub fn is_selectable(
        &self,
        date: NaiveDate,
        min_date: NaiveDate,
        booked_rooms: Option<u32>,
    ) -> bool {
        date >= min_date && !self.is_fully_booked(date, booked_rooms)
    }

    /// Day status for coloring one calendar cell
    pub fn day_status(&self, date: NaiveDate, booked_rooms: Option<u32>) -> DayStatus {
        if self.is_fully_booked(date, booked_rooms) {
            return DayStatus::FullyBooked;
        }
        match self.override_for(date) {
            Some(ov) if ov.additional_rooms > 0 => DayStatus::ExtraRooms,
            Some(ov) if ov.has_custom_pricing() => DayStatus::CustomPricing,
            _ => DayStatus::Standard,
        }
    }

    /// Precompute day statuses for every future date in the override set.
    ///
    /// Only dates carrying an override can differ from `Standard`, so this
    /// is the complete coloring input for the date picker. Past dates are
    /// dropped since they are never selectable.
    pub fn calendar(&self, today: NaiveDate) -> Vec<CalendarDay> {
        let mut days: Vec<CalendarDay> = self
            .overrides
            .keys()
            .filter(|date| **date >= today)
            .map(|date| CalendarDay {
                date: *date,
                status: self.day_status(*date, None),
                available_rooms: self.available_rooms(*date, None),
            })
            .collect();
        days.sort_by_key(|day| day.date);
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accommodation(base_rooms: u32) -> Accommodation {
        Accommodation {
            id: "lagoon-villa".to_string(),
            name: "Lagoon Villa".to_string(),
            description: None,
            adult_price: 1000.0,
            child_price: 500.0,
            base_rooms,
            max_guests_per_room: 4,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room_override(date: NaiveDate, additional_rooms: i32) -> DateOverride {
        DateOverride {
            date,
            additional_rooms,
            all_blocked: false,
            adult_price: None,
            child_price: None,
        }
    }

    #[test]
    fn test_base_rooms_apply_without_override() {
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![]);
        let day = date(2024, 6, 1);
        assert_eq!(resolver.total_rooms(day), 5);
        assert_eq!(resolver.available_rooms(day, Some(2)), 3);
    }

    #[test]
    fn test_fully_booked_when_occupancy_matches_total() {
        // baseRooms=5, no overrides, booked=5 -> 0 available, unselectable
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![]);
        let day = date(2024, 6, 1);
        assert_eq!(resolver.available_rooms(day, Some(5)), 0);
        assert!(resolver.is_fully_booked(day, Some(5)));
        assert!(!resolver.is_selectable(day, date(2024, 5, 1), Some(5)));
        assert_eq!(resolver.day_status(day, Some(5)), DayStatus::FullyBooked);
    }

    #[test]
    fn test_overbooked_occupancy_never_goes_negative() {
        let resolver = AvailabilityResolver::new(&accommodation(3), vec![]);
        assert_eq!(resolver.available_rooms(date(2024, 6, 1), Some(7)), 0);
    }

    #[test]
    fn test_positive_override_adds_rooms() {
        let day = date(2024, 6, 1);
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![room_override(day, 3)]);
        assert_eq!(resolver.total_rooms(day), 8);
        assert_eq!(resolver.day_status(day, None), DayStatus::ExtraRooms);
        // The override applies to its date only
        assert_eq!(resolver.total_rooms(date(2024, 6, 2)), 5);
    }

    #[test]
    fn test_negative_override_floors_at_zero() {
        let day = date(2024, 6, 1);
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![room_override(day, -9)]);
        assert_eq!(resolver.total_rooms(day), 0);
        assert!(resolver.is_fully_booked(day, None));
    }

    #[test]
    fn test_all_blocked_withdraws_the_property() {
        let day = date(2024, 6, 1);
        let mut ov = room_override(day, 2);
        ov.all_blocked = true;
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![ov]);
        assert_eq!(resolver.total_rooms(day), 0);
        assert_eq!(resolver.day_status(day, None), DayStatus::FullyBooked);
    }

    #[test]
    fn test_past_dates_are_never_selectable() {
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![]);
        let today = date(2024, 6, 15);
        assert!(!resolver.is_selectable(date(2024, 6, 14), today, None));
        assert!(resolver.is_selectable(today, today, None));
        assert!(resolver.is_selectable(date(2024, 6, 16), today, None));
    }

    #[test]
    fn test_missing_occupancy_is_optimistic() {
        let resolver = AvailabilityResolver::new(&accommodation(5), vec![]);
        let day = date(2024, 6, 1);
        assert_eq!(resolver.available_rooms(day, None), 5);
        assert!(resolver.is_selectable(day, day, None));
    }

    #[test]
    fn test_custom_pricing_status_comes_after_extra_rooms() {
        let priced = DateOverride {
            date: date(2024, 6, 1),
            additional_rooms: 0,
            all_blocked: false,
            adult_price: Some(1500.0),
            child_price: None,
        };
        let priced_with_rooms = DateOverride {
            date: date(2024, 6, 2),
            additional_rooms: 2,
            all_blocked: false,
            adult_price: Some(1500.0),
            child_price: None,
        };
        let resolver =
            AvailabilityResolver::new(&accommodation(5), vec![priced, priced_with_rooms]);
        assert_eq!(
            resolver.day_status(date(2024, 6, 1), None),
            DayStatus::CustomPricing
        );
        assert_eq!(
            resolver.day_status(date(2024, 6, 2), None),
            DayStatus::ExtraRooms
        );
    }

    #[test]
    fn test_calendar_drops_past_dates_and_sorts() {
        let overrides = vec![
            room_override(date(2024, 6, 20), 1),
            room_override(date(2024, 6, 5), -5),
            room_override(date(2024, 6, 10), 0),
        ];
        let resolver = AvailabilityResolver::new(&accommodation(5), overrides);
        let calendar = resolver.calendar(date(2024, 6, 8));

        let dates: Vec<NaiveDate> = calendar.iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(2024, 6, 10), date(2024, 6, 20)]);
        assert_eq!(calendar[0].status, DayStatus::Standard);
        assert_eq!(calendar[1].status, DayStatus::ExtraRooms);
        assert_eq!(calendar[1].available_rooms, 6);
    }

    #[test]
    fn test_availability_stays_within_bounds() {
        let overrides = vec![
            room_override(date(2024, 6, 1), 3),
            room_override(date(2024, 6, 2), -2),
        ];
        let resolver = AvailabilityResolver::new(&accommodation(5), overrides);
        for day in [date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)] {
            for booked in [None, Some(0), Some(4), Some(20)] {
                let available = resolver.available_rooms(day, booked);
                assert!(available <= 8, "{day} {booked:?} -> {available}");
            }
        }
    }
}
