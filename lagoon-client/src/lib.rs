//! Lagoon Client - HTTP client for the booking API
//!
//! Provides the typed endpoint surface the booking engine consumes:
//! accommodation catalog, calendar availability, coupons, amenities,
//! booking creation and payment initiation.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::BookingApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{
    Accommodation, Amenity, ApiResponse, BookingConfirmation, BookingCreate, Coupon,
    DateOverride, PaymentRequest, PaymentSession, RoomOccupancy,
};
