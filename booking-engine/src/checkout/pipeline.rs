//! Submission pipeline
//!
//! Explicit stage machine: Validating, SubmittingBooking,
//! InitiatingPayment, Redirecting. Validation failures never reach the
//! network. Booking creation is never retried; payment initiation
//! retries only on the gateway's rate-limit signal with exponential
//! backoff and a bounded attempt count.

use std::time::Duration;

use lagoon_client::BookingApi;
use shared::{BookingCreate, PaymentRequest, PaymentSession};

use crate::draft::ReservationDraft;
use crate::pricing::Quote;

use super::{CheckoutError, CheckoutObserver, CheckoutStage, gateway, validate};

/// Payment initiation attempts, total (first try included)
pub const MAX_PAYMENT_ATTEMPTS: u32 = 3;

/// First backoff delay; doubles after every rate-limited attempt
const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Terminal result of a successful checkout
#[derive(Debug, Clone)]
pub struct CheckoutComplete {
    pub booking_id: String,
    pub gateway_url: String,
    /// Self-submitting form document for the gateway redirect
    pub redirect_form: String,
    /// Payment attempts used (1 unless the gateway rate limited)
    pub attempts: u32,
}

/// Run the full submission pipeline for a draft.
///
/// The quote must come from the same draft; its amounts are snapshotted
/// into the booking payload. Success ends in `Redirecting`, a terminal
/// stage. Every failure transitions back to `Idle` before the error
/// surfaces.
pub async fn run_checkout(
    api: &dyn BookingApi,
    accommodation_id: &str,
    draft: &ReservationDraft,
    quote: &Quote,
    observer: &mut dyn CheckoutObserver,
) -> Result<CheckoutComplete, CheckoutError> {
    observer.on_stage(CheckoutStage::Validating);
    let errors = validate::validate_draft(draft);
    if !errors.is_empty() {
        observer.on_stage(CheckoutStage::Idle);
        return Err(CheckoutError::Validation(errors));
    }

    let Some(booking) = build_booking(accommodation_id, draft, quote) else {
        observer.on_stage(CheckoutStage::Idle);
        return Err(CheckoutError::Booking("Check-in date missing".to_string()));
    };

    observer.on_stage(CheckoutStage::SubmittingBooking);
    let confirmation = match api.create_booking(&booking).await {
        Ok(confirmation) => confirmation,
        Err(e) => {
            // Never retried: a second POST could double-book
            tracing::error!("Booking creation failed: {e}");
            observer.on_stage(CheckoutStage::Idle);
            return Err(CheckoutError::Booking(e.to_string()));
        }
    };
    tracing::info!(booking_id = %confirmation.booking_id, "Booking created");

    observer.on_stage(CheckoutStage::InitiatingPayment);
    let request = PaymentRequest {
        booking_id: confirmation.booking_id.clone(),
        amount: quote.advance_amount,
        contact: draft.contact().clone(),
    };
    let (session, attempts) = match initiate_with_retry(api, &request, observer).await {
        Ok(initiated) => initiated,
        Err(e) => {
            observer.on_stage(CheckoutStage::Idle);
            return Err(e);
        }
    };

    observer.on_stage(CheckoutStage::Redirecting);
    tracing::info!(
        booking_id = %confirmation.booking_id,
        gateway_url = %session.gateway_url,
        attempts,
        "Redirecting to payment gateway"
    );
    let redirect_form = gateway::redirect_form(&session);
    Ok(CheckoutComplete {
        booking_id: confirmation.booking_id,
        gateway_url: session.gateway_url,
        redirect_form,
        attempts,
    })
}

/// Snapshot the validated draft and its quote into the booking payload
fn build_booking(
    accommodation_id: &str,
    draft: &ReservationDraft,
    quote: &Quote,
) -> Option<BookingCreate> {
    let check_in = draft.check_in()?;
    let check_out = draft.check_out()?;
    Some(BookingCreate {
        accommodation_id: accommodation_id.to_string(),
        contact: draft.contact().clone(),
        check_in,
        check_out,
        room_count: draft.room_count(),
        room_guests: draft.room_guests().to_vec(),
        food_counts: draft.food_counts(),
        total_guests: draft.total_guests(),
        subtotal: quote.subtotal,
        discount: quote.discount,
        final_amount: quote.final_amount,
        advance_amount: quote.advance_amount,
        coupon_code: draft.applied_coupon().map(|coupon| coupon.code.clone()),
    })
}

/// Payment initiation with exponential backoff.
///
/// Only the rate-limit signal is retried. Every rate-limited attempt
/// waits out its backoff (1s, 2s, 4s), the last one included, before
/// the next attempt or the terminal error.
async fn initiate_with_retry(
    api: &dyn BookingApi,
    request: &PaymentRequest,
    observer: &mut dyn CheckoutObserver,
) -> Result<(PaymentSession, u32), CheckoutError> {
    let mut delay = INITIAL_RETRY_DELAY;

    for attempt in 1..=MAX_PAYMENT_ATTEMPTS {
        match api.initiate_payment(request).await {
            Ok(session) => return Ok((session, attempt)),
            Err(e) if e.is_rate_limited() => {
                tracing::warn!(
                    attempt,
                    max_attempts = MAX_PAYMENT_ATTEMPTS,
                    "Payment gateway rate limited: {e}, backing off {}ms",
                    delay.as_millis()
                );
                observer.on_retry_wait(attempt, MAX_PAYMENT_ATTEMPTS, delay);
                tokio::time::sleep(delay).await;
                delay *= 2;
                if attempt == MAX_PAYMENT_ATTEMPTS {
                    return Err(CheckoutError::Payment(e.to_string()));
                }
            }
            Err(e) => {
                tracing::error!(attempt, "Payment initiation failed: {e}");
                return Err(CheckoutError::Payment(e.to_string()));
            }
        }
    }

    Err(CheckoutError::Payment("attempts exhausted".to_string()))
}

// ========== Tests ==========
