use chrono::{DateTime, Utc};
use serde::Serialize;

/// Orders are always created in Indian rupees.
pub const CURRENCY_INR: &str = "INR";

/// Order-creation payload sent to the payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    /// Amount in minor units (paise).
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
    pub notes: OrderNotes,
}

/// Descriptive metadata attached to the order. Absent inputs are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderNotes {
    pub activity: String,
    pub date: String,
    pub slots: String,
}

/// `receipt_order_<epoch millis>`. Two orders in the same millisecond share a
/// receipt; the gateway treats receipts as advisory.
pub fn receipt_at(now: DateTime<Utc>) -> String {
    format!("receipt_order_{}", now.timestamp_millis())
}
