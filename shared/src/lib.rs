//! Shared types for the Lagoon booking platform
//!
//! Wire-facing models (accommodation, calendar, coupon, booking, payment)
//! and the API response envelope used across the client and the engine.
//! No I/O and no business rules live here.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Accommodation, Amenity, BookingConfirmation, BookingCreate, Coupon, DateOverride,
    DiscountType, FoodCounts, GuestContact, PaymentRequest, PaymentSession, RoomGuests,
    RoomOccupancy,
};
pub use response::ApiResponse;
