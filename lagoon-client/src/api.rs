//! Booking API trait
//!
//! The seam between the booking engine and the wire. `HttpClient` is the
//! production implementation; tests substitute scripted mocks.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    Accommodation, Amenity, BookingConfirmation, BookingCreate, Coupon, DateOverride,
    PaymentRequest, PaymentSession, RoomOccupancy,
};

use crate::ClientResult;

/// Remote booking API surface
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// List the accommodation catalog
    async fn list_accommodations(&self) -> ClientResult<Vec<Accommodation>>;

    /// Fetch one accommodation's detail
    async fn get_accommodation(&self, id: &str) -> ClientResult<Accommodation>;

    /// Fetch blocked/override dates for an accommodation
    async fn list_date_overrides(&self, accommodation_id: &str)
    -> ClientResult<Vec<DateOverride>>;

    /// Fetch the booked-room count for a check-in date
    async fn room_occupancy(
        &self,
        accommodation_id: &str,
        date: NaiveDate,
    ) -> ClientResult<RoomOccupancy>;

    /// List active coupons
    async fn list_coupons(&self) -> ClientResult<Vec<Coupon>>;

    /// List amenities
    async fn list_amenities(&self) -> ClientResult<Vec<Amenity>>;

    /// Create a booking record; the returned id gates payment initiation
    async fn create_booking(&self, booking: &BookingCreate) -> ClientResult<BookingConfirmation>;

    /// Initiate a payment for a created booking
    async fn initiate_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentSession>;
}
