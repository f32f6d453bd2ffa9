//! Reservation submission pipeline
//!
//! Drives a validated draft through booking creation, payment initiation
//! with bounded retry, and the gateway redirect.

mod gateway;
mod pipeline;
mod validate;

pub use gateway::redirect_form;
pub use pipeline::{CheckoutComplete, MAX_PAYMENT_ATTEMPTS, run_checkout};
pub use validate::{Field, ValidationErrors, validate_draft};

use std::time::Duration;

use thiserror::Error;

/// Submission pipeline stage
///
/// `Idle` is initial; `Redirecting` is terminal (the browser navigates
/// away). Every failure path transitions back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Idle,
    Validating,
    SubmittingBooking,
    InitiatingPayment,
    Redirecting,
}

/// Observer for user-visible checkout progress
///
/// Default methods are no-ops so hosts implement only what they render.
pub trait CheckoutObserver: Send {
    /// Stage transition, including the return to `Idle` on failure
    fn on_stage(&mut self, _stage: CheckoutStage) {}

    /// A rate-limited payment attempt is waiting out its backoff
    fn on_retry_wait(&mut self, _attempt: u32, _max_attempts: u32, _delay: Duration) {}
}

/// For hosts that do not render progress
impl CheckoutObserver for () {}

/// Checkout failure; every variant leaves the pipeline back at `Idle`
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more draft fields are invalid; no network call was made
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Booking creation failed; never retried automatically
    #[error("Booking could not be created: {0}")]
    Booking(String),

    /// Payment initiation failed, either immediately or after the retry
    /// budget was exhausted
    #[error("Payment could not be initiated: {0}")]
    Payment(String),
}
