//! Accommodation model

use serde::{Deserialize, Serialize};

/// Accommodation entity
///
/// Read-only reference data: base rates and room capacity are immutable for
/// the duration of a booking session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base nightly rate per adult
    pub adult_price: f64,
    /// Base nightly rate per child
    pub child_price: f64,
    /// Room count before date overrides
    pub base_rooms: u32,
    pub max_guests_per_room: u32,
}
