//! Booking models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Adult/child split for one room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomGuests {
    pub adults: u32,
    pub children: u32,
}

impl RoomGuests {
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }
}

impl Default for RoomGuests {
    /// Minimum valid occupancy for a newly added room
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
        }
    }
}

/// Meal preference counts
///
/// The three counts must sum to the total guest count before a booking can
/// be submitted (food parity).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FoodCounts {
    pub veg: u32,
    pub non_veg: u32,
    pub jain: u32,
}

impl FoodCounts {
    pub fn total(&self) -> u32 {
        self.veg + self.non_veg + self.jain
    }
}

/// Guest contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create booking payload
///
/// Full draft snapshot posted once per submission attempt. Amounts are the
/// engine-computed totals, not re-derived server side inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub accommodation_id: String,
    pub contact: GuestContact,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_count: u32,
    pub room_guests: Vec<RoomGuests>,
    pub food_counts: FoodCounts,
    pub total_guests: u32,
    pub subtotal: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub advance_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

/// Booking creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_defaults_to_minimum_occupancy() {
        let room = RoomGuests::default();
        assert_eq!(room.adults, 2);
        assert_eq!(room.children, 0);
        assert_eq!(room.total(), 2);
    }

    #[test]
    fn test_food_counts_serialize_camel_case() {
        let counts = FoodCounts {
            veg: 2,
            non_veg: 1,
            jain: 1,
        };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"veg":2,"nonVeg":1,"jain":1}"#);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_booking_create_omits_absent_coupon() {
        let payload = BookingCreate {
            accommodation_id: "a1".into(),
            contact: GuestContact::default(),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            room_count: 1,
            room_guests: vec![RoomGuests::default()],
            food_counts: FoodCounts::default(),
            total_guests: 2,
            subtotal: 2000.0,
            discount: 0.0,
            final_amount: 2000.0,
            advance_amount: 600.0,
            coupon_code: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("couponCode"));
        assert!(json.contains("\"checkIn\":\"2024-06-01\""));
    }
}
