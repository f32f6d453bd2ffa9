//! Pricing & Coupon Engine
//!
//! Computes nights, stay subtotal, coupon discounts and the advance
//! deposit. Uses rust_decimal for precise calculations, stores as f64.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::{Accommodation, Coupon, DateOverride, DiscountType, RoomGuests};
use thiserror::Error;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Advance deposit share of the final amount (fixed 30% policy)
const ADVANCE_RATE_PERCENT: i64 = 30;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Coupon application failure, in check order
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponError {
    #[error("Invalid coupon code")]
    InvalidCode,
    #[error("This coupon has expired")]
    Expired,
    #[error("This coupon is no longer active")]
    Inactive,
    #[error("Minimum order amount of {required} not met")]
    MinimumNotMet { required: f64 },
}

/// Priced stay snapshot
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: u32,
    pub subtotal: f64,
    pub discount: f64,
    pub final_amount: f64,
    /// 30% deposit, rounded to the nearest currency unit
    pub advance_amount: f64,
}

/// Nights between the chosen dates, minimum one.
///
/// Whole-day dates make the ceiling exact. With no dates chosen the
/// minimum of one applies; that value feeds previews only, never a
/// submittable total.
pub fn nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            (check_out - check_in).num_days().unsigned_abs().max(1) as u32
        }
        _ => 1,
    }
}

/// Nightly rates in effect for a stay.
///
/// An override for the check-in date replaces the base rate for the whole
/// stay. The lookup is keyed on check-in only, so per-night variation
/// across a multi-night stay is not represented.
fn stay_rates(
    accommodation: &Accommodation,
    check_in_override: Option<&DateOverride>,
) -> (Decimal, Decimal) {
    let adult = check_in_override
        .and_then(|ov| ov.adult_price)
        .unwrap_or(accommodation.adult_price);
    let child = check_in_override
        .and_then(|ov| ov.child_price)
        .unwrap_or(accommodation.child_price);
    (to_decimal(adult), to_decimal(child))
}

fn subtotal_decimal(
    accommodation: &Accommodation,
    check_in_override: Option<&DateOverride>,
    room_guests: &[RoomGuests],
    nights: u32,
) -> Decimal {
    let (adult_rate, child_rate) = stay_rates(accommodation, check_in_override);
    let per_night: Decimal = room_guests
        .iter()
        .map(|room| {
            Decimal::from(room.adults) * adult_rate + Decimal::from(room.children) * child_rate
        })
        .sum();
    per_night * Decimal::from(nights)
}

/// Pre-discount stay subtotal
pub fn subtotal(
    accommodation: &Accommodation,
    check_in_override: Option<&DateOverride>,
    room_guests: &[RoomGuests],
    nights: u32,
) -> f64 {
    to_f64(subtotal_decimal(
        accommodation,
        check_in_override,
        room_guests,
        nights,
    ))
}

/// Discount for a coupon against a subtotal.
///
/// Percentage discounts cap at `max_discount` when present; fixed
/// discounts are flat.
fn discount_value(coupon: &Coupon, subtotal: Decimal) -> Decimal {
    match coupon.discount_type {
        DiscountType::Percentage => {
            let raw = subtotal * to_decimal(coupon.discount) / Decimal::ONE_HUNDRED;
            match coupon.max_discount {
                Some(cap) => raw.min(to_decimal(cap)),
                None => raw,
            }
        }
        DiscountType::Fixed => to_decimal(coupon.discount),
    }
}

/// Compute the full priced snapshot for the current draft state
pub fn quote(
    accommodation: &Accommodation,
    check_in_override: Option<&DateOverride>,
    room_guests: &[RoomGuests],
    nights: u32,
    coupon: Option<&Coupon>,
) -> Quote {
    let subtotal = subtotal_decimal(accommodation, check_in_override, room_guests, nights);
    let discount = coupon
        .map(|coupon| discount_value(coupon, subtotal))
        .unwrap_or(Decimal::ZERO);
    let final_amount = (subtotal - discount).max(Decimal::ZERO);
    let advance_rate = Decimal::new(ADVANCE_RATE_PERCENT, 2);
    let advance_amount = (final_amount * advance_rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Quote {
        nights,
        subtotal: to_f64(subtotal),
        discount: to_f64(discount),
        final_amount: to_f64(final_amount),
        advance_amount: advance_amount.to_f64().unwrap_or_default(),
    }
}

/// Validate a coupon code against the fetched coupon list.
///
/// Checks run in a fixed order: code match (case-insensitive), expiry,
/// active flag, minimum spend against the pre-discount subtotal. Nothing
/// is cached; re-applying re-runs the full sequence.
pub fn check_coupon(
    coupons: &[Coupon],
    code: &str,
    subtotal: f64,
    now: DateTime<Utc>,
) -> Result<Coupon, CouponError> {
    let coupon = coupons
        .iter()
        .find(|coupon| coupon.code.eq_ignore_ascii_case(code.trim()))
        .ok_or(CouponError::InvalidCode)?;

    if coupon.expiry_date < now {
        return Err(CouponError::Expired);
    }
    if !coupon.active {
        return Err(CouponError::Inactive);
    }
    if let Some(min_amount) = coupon.min_amount {
        if to_decimal(subtotal) < to_decimal(min_amount) {
            return Err(CouponError::MinimumNotMet {
                required: min_amount,
            });
        }
    }
    Ok(coupon.clone())
}
