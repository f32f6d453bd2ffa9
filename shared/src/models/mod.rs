//! Data models
//!
//! Shared between the API client and the booking engine. The remote API is
//! JavaScript-backed, so wire field names are camelCase and all IDs are
//! strings.

pub mod accommodation;
pub mod amenity;
pub mod booking;
pub mod calendar;
pub mod coupon;
pub mod payment;

// Re-exports
pub use accommodation::*;
pub use amenity::*;
pub use booking::*;
pub use calendar::*;
pub use coupon::*;
pub use payment::*;
