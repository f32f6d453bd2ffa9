//! Lagoon booking engine
//!
//! Client-side reservation pricing and availability engine: turns (dates,
//! rooms, guests, coupon) into a validated, priced booking request and
//! drives the submission protocol through booking creation, payment
//! initiation with bounded retry, and the gateway redirect.
//!
//! The engine owns no persistence and no rendering. Remote data arrives
//! through [`lagoon_client::BookingApi`]; all draft mutation goes through
//! [`session::BookingSession`].

pub mod availability;
pub mod catalog;
pub mod checkout;
pub mod draft;
pub mod pricing;
pub mod session;

pub use availability::{AvailabilityResolver, CalendarDay, DayStatus};
pub use catalog::CatalogCache;
pub use checkout::{
    CheckoutComplete, CheckoutError, CheckoutObserver, CheckoutStage, Field, ValidationErrors,
};
pub use draft::{GuestField, MIN_GUESTS_PER_ROOM, ReservationDraft};
pub use pricing::{CouponError, Quote};
pub use session::BookingSession;
