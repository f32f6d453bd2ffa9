//! Coupon model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Coupon entity
///
/// Read-only reference data; the engine selects/deselects coupons for a
/// draft but never mutates one. Codes are unique and matched
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub discount_type: DiscountType,
    /// Percentage points for `Percentage`, flat currency amount for `Fixed`
    pub discount: f64,
    /// Minimum pre-discount subtotal required to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    /// Cap on the computed discount (percentage type only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    pub expiry_date: DateTime<Utc>,
    pub active: bool,
}
