//! Calendar availability models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date-specific room/price override
///
/// At most one per date per accommodation. `additional_rooms` is a signed
/// delta on the base room count; `all_blocked` withdraws the property
/// entirely for that date regardless of the delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOverride {
    pub date: NaiveDate,
    #[serde(default)]
    pub additional_rooms: i32,
    #[serde(default)]
    pub all_blocked: bool,
    /// Overrides the base adult rate for stays checking in on this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_price: Option<f64>,
}

impl DateOverride {
    /// Whether this override carries date-specific pricing
    pub fn has_custom_pricing(&self) -> bool {
        self.adult_price.is_some() || self.child_price.is_some()
    }
}

/// Rooms already booked for a given check-in date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancy {
    pub date: NaiveDate,
    #[serde(default)]
    pub booked_rooms: u32,
}
