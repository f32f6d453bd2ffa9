//! Payment models

use serde::{Deserialize, Serialize};

use super::GuestContact;

/// Initiate payment payload
///
/// One POST per attempt; `amount` is always the advance amount, never the
/// full booking total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: f64,
    pub contact: GuestContact,
}

/// Payment initiation response
///
/// `payment_data` is an opaque key/value map mirrored field-for-field into
/// the gateway redirect form. Keys are never interpreted client side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSession {
    pub gateway_url: String,
    pub payment_data: serde_json::Map<String, serde_json::Value>,
}
